pub const WORKER_NAMES: &[&str] = &[
    "Alexei Stakhanov",
    "Pasha Angelina",
    "Nikita Izotov",
    "Maria Demchenko",
    "Alexander Busygin",
    "Dusya Vinogradova",
    "Pyotr Krivonos",
    "Ivan Gudov",
];

/// `{worker}`, `{building}` and `{boost}` are substituted when an announcement is formatted.
pub const ANNOUNCEMENT_TEMPLATES: &[&str] = &[
    "Comrade {worker} of the {building} has exceeded the norm {boost} times over!",
    "Glory to {worker}! The {building} reports output at {boost}x the plan.",
    "Pravda hails {worker}: a shining example at the {building}, {boost} times the norm.",
    "The {building} collective salutes {worker}, whose labour surpassed the quota {boost}-fold.",
];
