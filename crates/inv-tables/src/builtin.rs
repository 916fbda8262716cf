//! Built-in table contents. `data/tables.toml` mirrors these values.

/// Explicit `device_type` spellings and the vocabulary term they map to.
pub const DEVICE_ALIASES: &[(&str, &str)] = &[
    ("server", "server"),
    ("srv", "server"),
    ("svr", "server"),
    ("host", "server"),
    ("switch", "switch"),
    ("sw", "switch"),
    ("router", "router"),
    ("rtr", "router"),
    ("gw", "router"),
    ("gateway", "router"),
    ("printer", "printer"),
    ("print", "printer"),
    ("prn", "printer"),
    ("iot", "iot"),
    ("camera", "iot"),
    ("cam", "iot"),
    ("dns", "dns"),
    ("nameserver", "dns"),
    ("firewall", "firewall"),
    ("fw", "firewall"),
];

/// Hostname/notes keyword groups, in priority order.
pub const DEVICE_KEYWORDS: &[(&str, &[&str])] = &[
    ("server", &["server", "srv", "host"]),
    ("switch", &["switch", "sw"]),
    ("router", &["router", "gw", "gateway"]),
    ("printer", &["printer", "print"]),
    ("iot", &["camera", "cam", "iot"]),
    ("dns", &["dns", "nameserver"]),
    ("firewall", &["firewall", "fw"]),
];

pub const TEAM_KEYWORDS: &[&str] = &[
    "platform",
    "ops",
    "sec",
    "facilities",
    "infrastructure",
    "network",
    "security",
];

/// Site tokens and their canonical spelling. All-uppercase values are acronyms.
pub const SITE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("bldg", "Building"),
    ("building", "Building"),
    ("campus", "Campus"),
    ("camp", "Campus"),
    ("flr", "Floor"),
    ("hq", "HQ"),
    ("headquarters", "HQ"),
    ("dc", "DC"),
    ("blr", "BLR"),
];

/// Site values meaning "no site".
pub const SITE_NULL_MARKERS: &[&str] = &["n/a", "na", "none"];
