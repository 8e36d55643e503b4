/// Every spritesheet loaded from `sprites/`, in load order.
pub const SHEET_NAMES: [&str; 55] = [
    "lineart",
    "singlecolours",
    "speckledcolours",
    "tabbycolours",
    "tortiesmoss",
    "whitepatches",
    "whitepatches2",
    "whitepatchesmoss",
    "eyes",
    "eyes2",
    "skin",
    "scars",
    "missingscars",
    "collars",
    "bellcollars",
    "bowcollars",
    "nyloncollars",
    "bengalcolours",
    "marbledcolours",
    "rosettecolours",
    "smokecolours",
    "tickedcolours",
    "mackerelcolours",
    "classiccolours",
    "sokokecolours",
    "agouticolours",
    "singlestripecolours",
    "maskedcolours",
    "shadersnewwhite",
    "lineartdead",
    "tortiepatchesmasks",
    "medcatherbs",
    "lineartdf",
    "lightingnew",
    "fademask",
    "fadestarclan",
    "fadedarkforest",
    "abyssiniancolours",
    "braidedcolours",
    "brindlecolours",
    "fadedcolours",
    "sabercolours",
    "splotchcolours",
    "mossherbs",
    "bloodcollars",
    "fogcolours",
    "mistcolours",
    "kittypetacc",
    "smudgecolours",
    "brokenmackerelcolours",
    "longdancolours",
    "brokenbraidedcolours",
    "charcoalbengalcolours",
    "dustcolours",
    "symbols",
];

/// The sheet every other sheet's tile size is measured against.
pub const LINEART: &str = "lineart";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sheet_names_are_unique() {
        let unique: HashSet<_> = SHEET_NAMES.iter().collect();

        assert_eq!(unique.len(), SHEET_NAMES.len());
        assert!(SHEET_NAMES.contains(&LINEART));
    }
}
