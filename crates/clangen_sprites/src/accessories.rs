use clangen_assets::{Atlas, GroupLayout};

use crate::register_rows;

pub const SCARS: &[&[&str]] = &[
    &[
        "ONE", "TWO", "THREE", "MANLEG", "BRIGHTHEART", "MANTAIL", "BRIDGE", "RIGHTBLIND",
        "LEFTBLIND", "BOTHBLIND", "BURNPAWS", "BURNTAIL",
    ],
    &[
        "BURNBELLY", "BEAKCHEEK", "BEAKLOWER", "BURNRUMP", "CATBITE", "RATBITE", "FROSTFACE",
        "FROSTTAIL", "FROSTMITT", "FROSTSOCK", "QUILLCHUNK", "QUILLSCRATCH",
    ],
    &[
        "TAILSCAR", "SNOUT", "CHEEK", "SIDE", "THROAT", "TAILBASE", "BELLY", "TOETRAP", "SNAKE",
        "LEGBITE", "NECKBITE", "FACE",
    ],
    &[
        "HINDLEG", "BACK", "QUILLSIDE", "SCRATCHSIDE", "TOE", "BEAKSIDE", "CATBITETWO", "SNAKETWO",
        "FOUR",
    ],
];

pub const MISSING_PARTS: &[&[&str]] = &[&[
    "LEFTEAR", "RIGHTEAR", "NOTAIL", "NOLEFTEAR", "NORIGHTEAR", "NOEAR", "HALFTAIL", "NOPAW",
]];

pub const MED_CAT_HERBS: &[&[&str]] = &[
    &["MAPLE LEAF", "HOLLY", "BLUE BERRIES", "FORGET ME NOTS", "RYE STALK", "LAUREL"],
    &["BLUEBELLS", "NETTLE", "POPPY", "LAVENDER", "HERBS", "PETALS"],
    // Third row of the sheet holds wild accessories and dry herbs.
    &[],
    &["OAK LEAVES", "CATMINT", "MAPLE SEED", "JUNIPER"],
];

pub const DRY_HERBS: &str = "DRY HERBS";

pub const WILD: &[&str] = &[
    "RED FEATHERS",
    "BLUE FEATHERS",
    "JAY FEATHERS",
    "MOTH WINGS",
    "CICADA WINGS",
];

/// Row of `medcatherbs` holding [WILD] accessories and [DRY_HERBS].
const WILD_ROW: u32 = 2;

pub const COLLARS: &[&[&str]] = &[
    &["CRIMSON", "BLUE", "YELLOW", "CYAN", "RED", "LIME"],
    &["GREEN", "RAINBOW", "BLACK", "SPIKES", "WHITE"],
    &["PINK", "PURPLE", "MULTI", "INDIGO"],
];

pub const BELL_COLLARS: &[&[&str]] = &[
    &["CRIMSONBELL", "BLUEBELL", "YELLOWBELL", "CYANBELL", "REDBELL", "LIMEBELL"],
    &["GREENBELL", "RAINBOWBELL", "BLACKBELL", "SPIKESBELL", "WHITEBELL"],
    &["PINKBELL", "PURPLEBELL", "MULTIBELL", "INDIGOBELL"],
];

pub const BOW_COLLARS: &[&[&str]] = &[
    &["CRIMSONBOW", "BLUEBOW", "YELLOWBOW", "CYANBOW", "REDBOW", "LIMEBOW"],
    &["GREENBOW", "RAINBOWBOW", "BLACKBOW", "SPIKESBOW", "WHITEBOW"],
    &["PINKBOW", "PURPLEBOW", "MULTIBOW", "INDIGOBOW"],
];

pub const NYLON_COLLARS: &[&[&str]] = &[
    &["CRIMSONNYLON", "BLUENYLON", "YELLOWNYLON", "CYANNYLON", "REDNYLON", "LIMENYLON"],
    &["GREENNYLON", "RAINBOWNYLON", "BLACKNYLON", "SPIKESNYLON", "WHITENYLON"],
    &["PINKNYLON", "PURPLENYLON", "MULTINYLON", "INDIGONYLON"],
];

pub const MOSS_HERBS: &[&[&str]] = &[
    &["LUNA MOTH", "ATLAS MOTH", "BIRD SKULL", "IVY", "DAISY", "BUTTERFLIES"],
    &["CLOVER", "ANTLERS", "STICK", "FIREFLIES", "WREATH", "FLOWER WREATH"],
    &["SPROUT", "MUSHROOM", "LILAC", "SEAWEED", "LILY PAD", "MONSTERA"],
    &["WILD FLOWERS", "TWIGS", "SHELL", "CRYSTAL", "SERPENT", "MOSS BALL"],
];

pub const KITTYPET_ACCESSORIES: &[&[&str]] = &[
    &[
        "SUNGLASSES", "BLUE BANDANA", "YELLOW BANDANA", "GREEN BANDANA", "RED BANDANA",
        "ORANGE BANDANA",
    ],
    &[
        "PURPLE BANDANA", "WHITE BANDANA", "BLACK BANDANA", "PINK BANDANA", "RED HARNESS",
        "ORANGE HARNESS",
    ],
    &[
        "YELLOW HARNESS", "GREEN HARNESS", "BLUE HARNESS", "PURPLE HARNESS", "WHITE HARNESS",
        "BLACK HARNESS",
    ],
    &["PINK HARNESS", "COWBOY HAT"],
];

pub const BLOOD_COLLARS: &[&[&str]] = &[
    &["CRIMSONFANG", "BLUEFANG", "YELLOWFANG", "CYANFANG", "REDFANG", "LIMEFANG"],
    &["GREENFANG", "RAINBOWFANG", "BLACKFANG", "SPIKESFANG", "WHITEFANG"],
    &["PINKFANG", "PURPLEFANG", "MULTIFANG", "INDIGOFANG"],
];

/// Registers scars, missing body parts and accessories.
pub(crate) fn register(atlas: &mut Atlas) {
    register_rows(atlas, "scars", SCARS, "scars");
    register_rows(atlas, "missingscars", MISSING_PARTS, "scars");

    register_rows(atlas, "medcatherbs", MED_CAT_HERBS, "acc_herbs");
    atlas.make_group(
        "medcatherbs",
        (5, WILD_ROW),
        &format!("acc_herbs{DRY_HERBS}"),
        GroupLayout::default(),
    );
    for (col, wild) in WILD.iter().enumerate() {
        atlas.make_group(
            "medcatherbs",
            (col as u32, WILD_ROW),
            &format!("acc_wild{wild}"),
            GroupLayout::default(),
        );
    }

    register_rows(atlas, "collars", COLLARS, "collars");
    register_rows(atlas, "bellcollars", BELL_COLLARS, "collars");
    register_rows(atlas, "bowcollars", BOW_COLLARS, "collars");
    register_rows(atlas, "nyloncollars", NYLON_COLLARS, "collars");

    register_rows(atlas, "mossherbs", MOSS_HERBS, "acc_moss");
    register_rows(atlas, "kittypetacc", KITTYPET_ACCESSORIES, "acc_kitty");
    register_rows(atlas, "bloodcollars", BLOOD_COLLARS, "dogcollars");
}
