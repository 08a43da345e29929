use std::fmt;

/// Device ports of the chip: 6 numbered pins, the housing (`db`) and
/// the indirect port name (`dr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dev {
    Num(u64),
    Db,
    Dr,
}

impl Dev {
    pub const MAX: u64 = 5;

    pub fn parse(s: &str) -> Option<Dev> {
        match s {
            "db" => Some(Dev::Db),
            "dr" => Some(Dev::Dr),
            _ => s.strip_prefix('d')?.parse().ok().map(Dev::Num),
        }
    }

    pub fn in_range(&self) -> bool {
        match self {
            Dev::Num(n) => *n <= Self::MAX,
            Dev::Db | Dev::Dr => true,
        }
    }
}

impl fmt::Display for Dev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dev::Num(n) => write!(f, "d{}", n),
            Dev::Db => write!(f, "db"),
            Dev::Dr => write!(f, "dr"),
        }
    }
}

#[test]
fn test() {
    assert_eq!(Dev::parse("d0"), Some(Dev::Num(0)));
    assert_eq!(Dev::parse("db"), Some(Dev::Db));
    assert_eq!(Dev::parse("r0"), None);
    assert!(!Dev::Num(6).in_range());
    assert_eq!(Dev::Num(6).to_string(), "d6");
}
