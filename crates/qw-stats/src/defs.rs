// Stat indices, item flags and weapon numbers shared by demo and client code.
//
// Values must match recorded streams bit for bit. New items only go into
// unused bit positions.

pub const MAX_CL_STATS: usize = 32;

pub const STAT_HEALTH: usize = 0;
// 1 was STAT_FRAGS
pub const STAT_WEAPON: usize = 2;
pub const STAT_AMMO: usize = 3;
pub const STAT_ARMOR: usize = 4;
// 5 was STAT_WEAPONFRAME
pub const STAT_SHELLS: usize = 6;
pub const STAT_NAILS: usize = 7;
pub const STAT_ROCKETS: usize = 8;
pub const STAT_CELLS: usize = 9;
pub const STAT_ACTIVEWEAPON: usize = 10;
pub const STAT_TOTALSECRETS: usize = 11;
pub const STAT_TOTALMONSTERS: usize = 12;
/// Bumped on the client side by svc_foundsecret.
pub const STAT_SECRETS: usize = 13;
/// Bumped on the client side by svc_killedmonster.
pub const STAT_MONSTERS: usize = 14;
pub const STAT_ITEMS: usize = 15;
/// Z_EXT_VIEWHEIGHT protocol extension.
pub const STAT_VIEWHEIGHT: usize = 16;
/// Z_EXT_TIME protocol extension.
pub const STAT_TIME: usize = 17;

/// Indices with no name. They may still appear in a stream and must be
/// stored, never reused for a new stat.
pub const RESERVED_STAT_INDICES: [usize; 2] = [1, 5];

pub const IT_SHOTGUN: u32 = 1;
pub const IT_SUPER_SHOTGUN: u32 = 2;
pub const IT_NAILGUN: u32 = 4;
pub const IT_SUPER_NAILGUN: u32 = 8;
pub const IT_GRENADE_LAUNCHER: u32 = 16;
pub const IT_ROCKET_LAUNCHER: u32 = 32;
pub const IT_LIGHTNING: u32 = 64;
pub const IT_SUPER_LIGHTNING: u32 = 128;
pub const IT_SHELLS: u32 = 256;
pub const IT_NAILS: u32 = 512;
pub const IT_ROCKETS: u32 = 1024;
pub const IT_CELLS: u32 = 2048;
pub const IT_AXE: u32 = 4096;
pub const IT_ARMOR1: u32 = 8192;
pub const IT_ARMOR2: u32 = 16384;
pub const IT_ARMOR3: u32 = 32768;
pub const IT_SUPERHEALTH: u32 = 65536;
pub const IT_KEY1: u32 = 131072;
pub const IT_KEY2: u32 = 262144;
pub const IT_INVISIBILITY: u32 = 524288;
pub const IT_INVULNERABILITY: u32 = 1_048_576;
pub const IT_SUIT: u32 = 2_097_152;
pub const IT_QUAD: u32 = 4_194_304;
pub const IT_SIGIL1: u32 = 1 << 28;
pub const IT_SIGIL2: u32 = 1 << 29;
pub const IT_SIGIL3: u32 = 1 << 30;
pub const IT_SIGIL4: u32 = 1 << 31;

pub const AXE_NUM: i32 = 1;
pub const SG_NUM: i32 = 2;
pub const SSG_NUM: i32 = 3;
pub const NG_NUM: i32 = 4;
pub const SNG_NUM: i32 = 5;
pub const GL_NUM: i32 = 6;
pub const RL_NUM: i32 = 7;
pub const LG_NUM: i32 = 8;

pub const NAMED_STATS: &[(&str, usize)] = &[
    ("STAT_HEALTH", STAT_HEALTH),
    ("STAT_WEAPON", STAT_WEAPON),
    ("STAT_AMMO", STAT_AMMO),
    ("STAT_ARMOR", STAT_ARMOR),
    ("STAT_SHELLS", STAT_SHELLS),
    ("STAT_NAILS", STAT_NAILS),
    ("STAT_ROCKETS", STAT_ROCKETS),
    ("STAT_CELLS", STAT_CELLS),
    ("STAT_ACTIVEWEAPON", STAT_ACTIVEWEAPON),
    ("STAT_TOTALSECRETS", STAT_TOTALSECRETS),
    ("STAT_TOTALMONSTERS", STAT_TOTALMONSTERS),
    ("STAT_SECRETS", STAT_SECRETS),
    ("STAT_MONSTERS", STAT_MONSTERS),
    ("STAT_ITEMS", STAT_ITEMS),
    ("STAT_VIEWHEIGHT", STAT_VIEWHEIGHT),
    ("STAT_TIME", STAT_TIME),
];

pub const NAMED_ITEMS: &[(&str, u32)] = &[
    ("IT_SHOTGUN", IT_SHOTGUN),
    ("IT_SUPER_SHOTGUN", IT_SUPER_SHOTGUN),
    ("IT_NAILGUN", IT_NAILGUN),
    ("IT_SUPER_NAILGUN", IT_SUPER_NAILGUN),
    ("IT_GRENADE_LAUNCHER", IT_GRENADE_LAUNCHER),
    ("IT_ROCKET_LAUNCHER", IT_ROCKET_LAUNCHER),
    ("IT_LIGHTNING", IT_LIGHTNING),
    ("IT_SUPER_LIGHTNING", IT_SUPER_LIGHTNING),
    ("IT_SHELLS", IT_SHELLS),
    ("IT_NAILS", IT_NAILS),
    ("IT_ROCKETS", IT_ROCKETS),
    ("IT_CELLS", IT_CELLS),
    ("IT_AXE", IT_AXE),
    ("IT_ARMOR1", IT_ARMOR1),
    ("IT_ARMOR2", IT_ARMOR2),
    ("IT_ARMOR3", IT_ARMOR3),
    ("IT_SUPERHEALTH", IT_SUPERHEALTH),
    ("IT_KEY1", IT_KEY1),
    ("IT_KEY2", IT_KEY2),
    ("IT_INVISIBILITY", IT_INVISIBILITY),
    ("IT_INVULNERABILITY", IT_INVULNERABILITY),
    ("IT_SUIT", IT_SUIT),
    ("IT_QUAD", IT_QUAD),
    ("IT_SIGIL1", IT_SIGIL1),
    ("IT_SIGIL2", IT_SIGIL2),
    ("IT_SIGIL3", IT_SIGIL3),
    ("IT_SIGIL4", IT_SIGIL4),
];

pub const NAMED_WEAPON_NUMS: &[(&str, i32)] = &[
    ("AXE_NUM", AXE_NUM),
    ("SG_NUM", SG_NUM),
    ("SSG_NUM", SSG_NUM),
    ("NG_NUM", NG_NUM),
    ("SNG_NUM", SNG_NUM),
    ("GL_NUM", GL_NUM),
    ("RL_NUM", RL_NUM),
    ("LG_NUM", LG_NUM),
];
