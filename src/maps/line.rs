// Fri Aug 21 2026 - Alex

use crate::maps::MapsError;

/// One parsed line of the process maps pseudo-file. Field order is fixed by
/// the kernel:
///
/// address           perms offset  dev   inode   pathname
/// 08048000-08056000 r-xp 00000000 03:0c 64593   /usr/sbin/gpm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub start: u64,
    pub end: u64,
    pub permissions: String,
    pub offset: u64,
    pub device_major: u32,
    pub device_minor: u32,
    pub inode: u64,
    pub path: String,
}

impl LineRecord {
    /// Parses one maps line. Anything short of the seven mandatory fields is
    /// a `Malformed` error; the pathname tail is optional.
    pub fn parse(line: &str) -> Result<Self, MapsError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let malformed = || MapsError::Malformed(line.to_string());

        let mut fields = line.splitn(6, ' ');
        let range = fields.next().ok_or_else(malformed)?;
        let permissions = fields.next().ok_or_else(malformed)?;
        let offset = fields.next().ok_or_else(malformed)?;
        let device = fields.next().ok_or_else(malformed)?;
        let inode = fields.next().ok_or_else(malformed)?;
        let path = fields.next().unwrap_or("").trim_start_matches(' ');

        let (start, end) = range.split_once('-').ok_or_else(malformed)?;
        let start = u64::from_str_radix(start, 16).map_err(|_| malformed())?;
        let end = u64::from_str_radix(end, 16).map_err(|_| malformed())?;
        if start >= end {
            return Err(MapsError::InvalidRange { start, end });
        }

        if permissions.len() != 4 || !permissions.is_ascii() {
            return Err(malformed());
        }

        let offset = u64::from_str_radix(offset, 16).map_err(|_| malformed())?;

        let (major, minor) = device.split_once(':').ok_or_else(malformed)?;
        let device_major = u32::from_str_radix(major, 16).map_err(|_| malformed())?;
        let device_minor = u32::from_str_radix(minor, 16).map_err(|_| malformed())?;

        let inode = inode.parse::<u64>().map_err(|_| malformed())?;

        Ok(Self {
            start,
            end,
            permissions: permissions.to_string(),
            offset,
            device_major,
            device_minor,
            inode,
            path: path.to_string(),
        })
    }

    pub fn size(&self) -> u64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_path() {
        let record =
            LineRecord::parse("08048000-08056000 r-xp 00000000 03:0c 64593   /usr/sbin/gpm")
                .unwrap();
        assert_eq!(record.start, 0x08048000);
        assert_eq!(record.end, 0x08056000);
        assert_eq!(record.permissions, "r-xp");
        assert_eq!(record.offset, 0);
        assert_eq!(record.device_major, 0x03);
        assert_eq!(record.device_minor, 0x0c);
        assert_eq!(record.inode, 64593);
        assert_eq!(record.path, "/usr/sbin/gpm");
        assert_eq!(record.size(), 0x0e000);
    }

    #[test]
    fn test_parse_line_without_path() {
        let record =
            LineRecord::parse("7ffd1a2b3000-7ffd1a2d4000 rw-p 00000000 00:00 0").unwrap();
        assert_eq!(record.path, "");
        assert_eq!(record.inode, 0);
    }

    #[test]
    fn test_parse_path_with_spaces() {
        let record = LineRecord::parse(
            "7f00000000-7f00001000 r--p 00000000 fd:01 1234   /data/app/with space/base.so",
        )
        .unwrap();
        assert_eq!(record.path, "/data/app/with space/base.so");
    }

    #[test]
    fn test_parse_strips_trailing_newline() {
        let record =
            LineRecord::parse("7f00000000-7f00001000 r--p 00000000 00:00 0 [vvar]\n").unwrap();
        assert_eq!(record.path, "[vvar]");

        let record = LineRecord::parse("7f00000000-7f00001000 rw-p 00000000 00:00 0\n").unwrap();
        assert_eq!(record.path, "");
    }

    #[test]
    fn test_parse_wide_device_numbers() {
        // nvme and dm majors do not fit a single hex byte
        let record =
            LineRecord::parse("7f00000000-7f00001000 r--p 00000000 103:05 99 /lib/x.so").unwrap();
        assert_eq!(record.device_major, 0x103);
        assert_eq!(record.device_minor, 0x05);
    }

    #[test]
    fn test_parse_rejects_short_line() {
        assert!(LineRecord::parse("deadbeef-feedface r-xp").is_err());
        assert!(LineRecord::parse("not a maps line at all").is_err());
        assert!(LineRecord::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_fields() {
        assert!(LineRecord::parse("zzz-feedface r-xp 00000000 03:0c 64593").is_err());
        assert!(LineRecord::parse("08048000-08056000 r-xp 00000000 030c 64593").is_err());
        assert!(LineRecord::parse("08048000-08056000 r-xp 00000000 03:0c inode").is_err());
        assert!(LineRecord::parse("08048000-08056000 rx 00000000 03:0c 64593").is_err());
    }

    #[test]
    fn test_parse_rejects_inverted_range() {
        let err = LineRecord::parse("08056000-08048000 r-xp 00000000 03:0c 64593").unwrap_err();
        assert!(matches!(err, MapsError::InvalidRange { .. }));
    }
}
