use clangen_assets::{Atlas, GroupLayout};

use crate::{register_rows, sheets::LINEART};

pub const EYE_COLOURS: &[&[&str]] = &[
    &["YELLOW", "AMBER", "HAZEL", "PALE GREEN", "GREEN", "BLUE"],
    &["DARK BLUE", "GREY", "CYAN", "EMERALD", "HEATHER BLUE", "SUN-LIT ICE"],
    &["COPPER", "SAGE", "BRIGHT BLUE", "PALE BLUE", "LAVENDER", "DARK GREY"],
    &["PALE YELLOW", "GOLD", "LIME", "HAZELNUT", "DARK AMBER", "SLATE"],
    &["RUBY", "LILAC", "LIGHT GREY", "PINK", "DARK HAZEL", "CHOCOLATE"],
];

pub const EYE_PATTERNS: &[&[&str]] = &[
    &["TRUE", "CENTRAL", "QUARTER", "SLIVER", "SPECKLES", "FROSTED"],
    &["RING", "HALFCENTRAL", "HALFRING", "BUBBLE", "OUTRING", "SWAP"],
];

pub const WHITE_PATCHES: &[&[&str]] = &[
    &[
        "FULLWHITE", "ANY", "TUXEDO", "LITTLE", "COLOURPOINT", "VAN", "ANYTWO", "MOON", "PHANTOM",
        "POWDER", "BLEACHED", "SAVANNAH", "FADESPOTS", "PEBBLESHINE",
    ],
    &[
        "EXTRA", "ONEEAR", "BROKEN", "LIGHTTUXEDO", "BUZZARDFANG", "RAGDOLL", "LIGHTSONG",
        "VITILIGO", "BLACKSTAR", "PIEBALD", "CURVED", "PETAL", "SHIBAINU", "OWL",
    ],
    &[
        "TIP", "FANCY", "FRECKLES", "RINGTAIL", "HALFFACE", "PANTSTWO", "GOATEE", "VITILIGOTWO",
        "PAWS", "MITAINE", "BROKENBLAZE", "SCOURGE", "DIVA", "BEARD",
    ],
    &[
        "TAIL", "BLAZE", "PRINCE", "BIB", "VEE", "UNDERS", "HONEY", "FAROFA", "DAMIEN", "MISTER",
        "BELLY", "TAILTIP", "TOES", "TOPCOVER",
    ],
    &[
        "APRON", "CAPSADDLE", "MASKMANTLE", "SQUEAKS", "STAR", "TOESTAIL", "RAVENPAW", "PANTS",
        "REVERSEPANTS", "SKUNK", "KARPATI", "HALFWHITE", "APPALOOSA", "DAPPLEPAW",
    ],
];

pub const WHITE_PATCHES_TWO: &[&[&str]] = &[
    &[
        "HEART", "LILTWO", "GLASS", "MOORISH", "SEPIAPOINT", "MINKPOINT", "SEALPOINT", "MAO",
        "LUNA", "CHESTSPECK", "WINGS", "PAINTED", "HEARTTWO", "WOODPECKER",
    ],
    &[
        "BOOTS", "MISS", "COW", "COWTWO", "BUB", "BOWTIE", "MUSTACHE", "REVERSEHEART", "SPARROW",
        "VEST", "LOVEBUG", "TRIXIE", "SAMMY", "SPARKLE",
    ],
    &[
        "RIGHTEAR", "LEFTEAR", "ESTRELLA", "SHOOTINGSTAR", "EYESPOT", "REVERSEEYE", "FADEBELLY",
        "FRONT", "BLOSSOMSTEP", "PEBBLE", "TAILTWO", "BUDDY", "BACKSPOT", "EYEBAGS",
    ],
    &[
        "BULLSEYE", "FINN", "DIGIT", "KROPKA", "FCTWO", "FCONE", "MIA", "SCAR", "BUSTER", "SMOKEY",
        "HAWKBLAZE", "CAKE", "ROSINA", "PRINCESS",
    ],
    &["LOCKET", "BLAZEMASK", "TEARS", "DOUGIE"],
];

pub const WHITE_PATCHES_MOSS: &[&[&str]] = &[
    &[
        "CHANCE", "MOSSY", "MOTH", "NIGHTMIST", "FALCON", "VENUS", "RETSUKO", "TIDAL", "DIAMOND",
        "ECLIPSE", "SNOWSTORM", "PEPPER", "COWTHREE", "COWFOUR",
    ],
    &[
        "COWFIVE", "COWSIX", "COWSEVEN", "COWEIGHT", "COWNINE", "COWTEN", "COWELEVEN",
        "FRECKLEMASK", "SPLAT", "BATWING", "SMALLPATCHES",
    ],
];

pub const COLOURS: &[&[&str]] = &[
    &[
        "WHITE", "SNOW WHITE", "GRAY", "SLATE", "DARK GRAY", "DARK SLATE", "PALE BLUE", "BLUE",
        "PALE LILAC", "LILAC", "SILVER", "BLACK", "SOOT BLACK", "OBSIDIAN", "GHOST",
    ],
    &[
        "PALE BROWN", "ALMOND", "ACORN", "LIGHT BROWN", "BROWN", "DARK BROWN", "PALE CINNAMON",
        "CINNAMON", "SABLE", "DARK SABLE", "BIRCH", "PALE LAVENDER", "LAVENDER", "DARK LAVENDER",
        "DARK ORANGE",
    ],
    &[
        "PALE FIRE", "FIRE", "DARK FIRE", "PALE GINGER", "GINGER", "DARK GINGER", "PALE GOLD",
        "YELLOW", "GOLD", "BRONZE", "ROSE", "LIGHT CREAM", "CREAM", "DARK CREAM", "DARK GOLD",
    ],
];

/// Pelt pattern sheets. Each holds every colour of [COLOURS] at the same position.
pub const PATTERN_SHEETS: &[&str] = &[
    "singlecolours",
    "tabbycolours",
    "marbledcolours",
    "rosettecolours",
    "smokecolours",
    "tickedcolours",
    "speckledcolours",
    "bengalcolours",
    "mackerelcolours",
    "classiccolours",
    "sokokecolours",
    "agouticolours",
    "singlestripecolours",
    "maskedcolours",
    "abyssiniancolours",
    "braidedcolours",
    "brindlecolours",
    "fadedcolours",
    "sabercolours",
    "splotchcolours",
    "fogcolours",
    "mistcolours",
    "smudgecolours",
    "brokenmackerelcolours",
    "longdancolours",
    "brokenbraidedcolours",
    "charcoalbengalcolours",
    "dustcolours",
];

pub const TORTIE_MASKS: &[&[&str]] = &[
    &[
        "ONE", "TWO", "THREE", "FOUR", "REDTAIL", "DELILAH", "HALF", "STREAK", "MASK", "SMOKE",
    ],
    &[
        "MINIMALONE", "MINIMALTWO", "MINIMALTHREE", "MINIMALFOUR", "OREO", "SWOOP", "CHIMERA",
        "CHEST", "ARMTAIL", "GRUMPYFACE",
    ],
    &[
        "MOTTLED", "SIDEMASK", "EYEDOT", "BANDANA", "PACMAN", "STREAMSTRIKE", "SMUDGED", "DAUB",
        "EMBER", "BRIE",
    ],
    &[
        "ORIOLE", "ROBIN", "BRINDLE", "PAIGE", "ROSETAIL", "SAFI", "DAPPLENIGHT", "BLANKET",
        "BELOVED", "BODY",
    ],
    &["SHILOH", "FRECKLED", "HEARTBEAT"],
];

pub const TORTIE_MASKS_MOSS: &[&[&str]] = &[
    &[
        "VIPER", "SKULL", "POINTS", "DITTO", "TABBY", "SPECKLED", "BENGAL", "CLASSIC", "MACKEREL",
        "MARBLED",
    ],
    &[
        "SABER", "ROSETTE", "MASKED", "DUST", "MAXIMUMONE", "MAXIMUMTWO", "MAXIMUMTHREE",
        "MAXIMUMFOUR", "MAXIMUMFIVE", "MAXIMUMSIX",
    ],
    &["MAXIMUMSEVEN", "MAXIMUMEIGHT"],
];

pub const SKIN_COLOURS: &[&[&str]] = &[
    &["BLACK", "RED", "PINK", "DARKBROWN", "BROWN", "LIGHTBROWN"],
    &["DARK", "DARKGREY", "GREY", "DARKSALMON", "SALMON", "PEACH"],
    &["DARKMARBLED", "MARBLED", "LIGHTMARBLED", "DARKBLUE", "BLUE", "LIGHTBLUE"],
];

/// Sprite name prefix of a pattern sheet, `tabbycolours` becomes `tabby`.
pub fn pattern_name(sheet: &str) -> &str {
    sheet.strip_suffix("colours").unwrap_or(sheet)
}

/// Registers lineart, fading fog and every pelt related group.
pub(crate) fn register(atlas: &mut Atlas) {
    let layout = GroupLayout::default();

    atlas.make_group(LINEART, (0, 0), "lines", layout);
    atlas.make_group("shadersnewwhite", (0, 0), "shaders", layout);
    atlas.make_group("lightingnew", (0, 0), "lighting", layout);

    atlas.make_group("lineartdead", (0, 0), "lineartdead", layout);
    atlas.make_group("lineartdf", (0, 0), "lineartdf", layout);

    for i in 0..3 {
        atlas.make_group("fademask", (i, 0), &format!("fademask{i}"), layout);
        atlas.make_group("fadestarclan", (i, 0), &format!("fadestarclan{i}"), layout);
        atlas.make_group("fadedarkforest", (i, 0), &format!("fadedf{i}"), layout);
    }

    register_rows(atlas, "eyes", EYE_COLOURS, "eyes");
    // Patterns are cut from the first eye sheet as well.
    register_rows(atlas, "eyes", EYE_PATTERNS, "eyes2");

    register_rows(atlas, "whitepatches", WHITE_PATCHES, "white");
    register_rows(atlas, "whitepatches2", WHITE_PATCHES_TWO, "white");
    register_rows(atlas, "whitepatchesmoss", WHITE_PATCHES_MOSS, "white");

    for (row, colours) in COLOURS.iter().enumerate() {
        for (col, colour) in colours.iter().enumerate() {
            for sheet in PATTERN_SHEETS {
                let name = format!("{}{colour}", pattern_name(sheet));
                atlas.make_group(sheet, (col as u32, row as u32), &name, layout);
            }
        }
    }

    register_rows(atlas, "tortiepatchesmasks", TORTIE_MASKS, "tortiemask");
    register_rows(atlas, "tortiesmoss", TORTIE_MASKS_MOSS, "tortiemask");

    register_rows(atlas, "skin", SKIN_COLOURS, "skin");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_name() {
        assert_eq!(pattern_name("singlecolours"), "single");
        assert_eq!(pattern_name("charcoalbengalcolours"), "charcoalbengal");
        assert_eq!(pattern_name("tortiesmoss"), "tortiesmoss");
    }

    #[test]
    fn test_colour_rows_are_complete() {
        assert!(COLOURS.iter().all(|row| row.len() == 15));
        assert_eq!(PATTERN_SHEETS.len(), 28);
    }
}
