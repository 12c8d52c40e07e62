//! Static species reference table. Care parameters for catalog plants
//! resolve here; custom plants carry their own inline fields instead.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::model::{CareLevel, LightLevel, SoilPreference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonIssue {
    pub symptom: &'static str,
    pub cause: &'static str,
    pub solution: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: &'static str,
    pub common_name: &'static str,
    pub scientific_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Days between checks, not waterings.
    pub check_frequency_days: i64,
    pub soil_preference: SoilPreference,
    pub light_level: LightLevel,
    pub care_level: CareLevel,
    pub pet_safe: bool,
    pub common_issues: &'static [CommonIssue],
    pub quick_tips: &'static [&'static str],
}

pub static SPECIES: &[Species] = &[
    Species {
        id: "snake-plant",
        common_name: "Snake Plant",
        scientific_name: "Sansevieria trifasciata",
        aliases: &[
            "Mother-in-Law's Tongue",
            "Sansevieria",
            "Viper's Bowstring Hemp",
        ],
        check_frequency_days: 14,
        soil_preference: SoilPreference::Dry,
        light_level: LightLevel::Low,
        care_level: CareLevel::Beginner,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Yellow, mushy leaves",
                cause: "Overwatering - roots are rotting",
                solution: "Let soil dry completely. Water less frequently. May need to repot in fresh, dry soil.",
            },
            CommonIssue {
                symptom: "Brown, crispy tips",
                cause: "Normal aging or inconsistent watering",
                solution: "Trim brown tips. Establish consistent watering schedule.",
            },
        ],
        quick_tips: &[
            "Nearly impossible to kill",
            "Can go 2-3 weeks without water",
            "Prefers being pot-bound",
            "Propagates easily from leaf cuttings",
        ],
    },
    Species {
        id: "pothos",
        common_name: "Pothos",
        scientific_name: "Epipremnum aureum",
        aliases: &["Devil's Ivy", "Golden Pothos", "Money Plant"],
        check_frequency_days: 7,
        soil_preference: SoilPreference::SlightlyMoist,
        light_level: LightLevel::Medium,
        care_level: CareLevel::Beginner,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Drooping leaves",
                cause: "Thirsty! Needs water",
                solution: "Water thoroughly. Leaves should perk up within hours.",
            },
            CommonIssue {
                symptom: "Yellow leaves",
                cause: "Overwatering or natural aging",
                solution: "Check soil moisture. If wet, let dry out. Yellow leaves are normal occasionally.",
            },
            CommonIssue {
                symptom: "Brown spots on leaves",
                cause: "Leaf spot disease from overwatering",
                solution: "Remove affected leaves. Reduce watering. Ensure good air circulation.",
            },
            CommonIssue {
                symptom: "Losing variegation",
                cause: "Insufficient light",
                solution: "Move to brighter location. New growth will be more variegated.",
            },
        ],
        quick_tips: &[
            "Leaves droop when thirsty - perfect indicator",
            "Very easy to propagate in water",
            "Grows 12-18 inches per month in good conditions",
            "Can be trained to climb or trail",
        ],
    },
    Species {
        id: "zz-plant",
        common_name: "ZZ Plant",
        scientific_name: "Zamioculcas zamiifolia",
        aliases: &["Zanzibar Gem", "Zuzu Plant", "Eternity Plant"],
        check_frequency_days: 14,
        soil_preference: SoilPreference::Dry,
        light_level: LightLevel::Low,
        care_level: CareLevel::Beginner,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Yellow stems/leaves",
                cause: "Overwatering - rhizome rot",
                solution: "Stop watering immediately. Let soil dry completely. Remove affected stems.",
            },
            CommonIssue {
                symptom: "Brown leaf tips",
                cause: "Low humidity or chlorine in water",
                solution: "Use filtered water. Mist occasionally if air is very dry.",
            },
        ],
        quick_tips: &[
            "Perfect for forgetful waterers",
            "Stores water in potato-like rhizomes",
            "Grows new stems slowly (1-2 per year)",
            "Wipe leaves occasionally to keep them shiny",
        ],
    },
    Species {
        id: "spider-plant",
        common_name: "Spider Plant",
        scientific_name: "Chlorophytum comosum",
        aliases: &["Airplane Plant", "Ribbon Plant", "Spider Ivy"],
        check_frequency_days: 7,
        soil_preference: SoilPreference::SlightlyMoist,
        light_level: LightLevel::Medium,
        care_level: CareLevel::Beginner,
        pet_safe: true,
        common_issues: &[
            CommonIssue {
                symptom: "Brown leaf tips",
                cause: "Fluoride/chlorine in tap water or low humidity",
                solution: "Use filtered or distilled water. Trim brown tips. Increase humidity.",
            },
            CommonIssue {
                symptom: "Pale leaves, no variegation",
                cause: "Too much direct sun",
                solution: "Move to location with indirect light.",
            },
        ],
        quick_tips: &[
            "Produces baby \"spiderettes\" that can be propagated",
            "Non-toxic to pets",
            "Great for hanging baskets",
            "Removes formaldehyde from air",
        ],
    },
    Species {
        id: "aloe-vera",
        common_name: "Aloe Vera",
        scientific_name: "Aloe barbadensis miller",
        aliases: &["True Aloe", "Medicine Plant", "Burn Plant"],
        check_frequency_days: 14,
        soil_preference: SoilPreference::Dry,
        light_level: LightLevel::BrightIndirect,
        care_level: CareLevel::Beginner,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Brown, mushy leaves",
                cause: "Overwatering - root rot",
                solution: "Let soil dry completely. Repot in cactus soil. Water less frequently.",
            },
            CommonIssue {
                symptom: "Thin, pale, stretching leaves",
                cause: "Not enough light",
                solution: "Move to brighter location. May need grow light.",
            },
            CommonIssue {
                symptom: "Red/brown leaves",
                cause: "Too much direct sun",
                solution: "Move to location with bright indirect light.",
            },
        ],
        quick_tips: &[
            "Use gel for minor burns and skin irritation",
            "Water only when soil is completely dry",
            "Needs well-draining cactus/succulent soil",
            "Produces \"pups\" that can be separated and repotted",
        ],
    },
    Species {
        id: "monstera",
        common_name: "Monstera Deliciosa",
        scientific_name: "Monstera deliciosa",
        aliases: &["Swiss Cheese Plant", "Split Leaf Philodendron"],
        check_frequency_days: 7,
        soil_preference: SoilPreference::SlightlyMoist,
        light_level: LightLevel::BrightIndirect,
        care_level: CareLevel::Intermediate,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Yellow leaves",
                cause: "Overwatering or natural aging",
                solution: "Check soil moisture. Reduce watering if soil is soggy. One yellow leaf occasionally is normal.",
            },
            CommonIssue {
                symptom: "Brown, crispy edges",
                cause: "Low humidity or underwatering",
                solution: "Increase humidity with misting or humidifier. Check watering schedule.",
            },
            CommonIssue {
                symptom: "No holes in new leaves",
                cause: "Young plant or insufficient light",
                solution: "Be patient if plant is young. Ensure bright indirect light. Fenestrations develop with maturity.",
            },
            CommonIssue {
                symptom: "Drooping leaves",
                cause: "Thirsty or root-bound",
                solution: "Water if soil is dry. Check if roots are coming out of drainage holes.",
            },
        ],
        quick_tips: &[
            "Leaf holes develop as plant matures - not on young leaves",
            "Wipe leaves monthly to keep them glossy",
            "Provide moss pole for climbing",
            "Can grow 1-2 feet per year",
        ],
    },
    Species {
        id: "rubber-plant",
        common_name: "Rubber Plant",
        scientific_name: "Ficus elastica",
        aliases: &["Rubber Tree", "Rubber Fig"],
        check_frequency_days: 7,
        soil_preference: SoilPreference::SlightlyMoist,
        light_level: LightLevel::BrightIndirect,
        care_level: CareLevel::Intermediate,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Dropping leaves",
                cause: "Change in environment, overwatering, or underwatering",
                solution: "Ficus are dramatic about change. Keep conditions consistent. Check soil moisture.",
            },
            CommonIssue {
                symptom: "Brown spots on leaves",
                cause: "Overwatering or cold draft",
                solution: "Let soil dry more between waterings. Move away from cold windows/AC.",
            },
        ],
        quick_tips: &[
            "Wipe leaves monthly - they collect dust",
            "Don't move it around - they hate change",
            "Prune to encourage bushier growth",
            "Milky sap is normal but can irritate skin",
        ],
    },
    Species {
        id: "dracaena",
        common_name: "Dracaena",
        scientific_name: "Dracaena spp.",
        aliases: &["Dragon Tree", "Corn Plant", "Janet Craig"],
        check_frequency_days: 10,
        soil_preference: SoilPreference::SlightlyMoist,
        light_level: LightLevel::Medium,
        care_level: CareLevel::Intermediate,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Brown leaf tips",
                cause: "Fluoride in tap water or low humidity",
                solution: "Use filtered or distilled water. Increase humidity. Trim brown tips.",
            },
            CommonIssue {
                symptom: "Yellow lower leaves",
                cause: "Natural aging or overwatering",
                solution: "A few yellow lower leaves are normal. Check soil - reduce watering if soggy.",
            },
        ],
        quick_tips: &[
            "Very effective air purifier",
            "Sensitive to fluoride in water",
            "Can grow quite tall (6+ feet)",
            "Lower leaves naturally yellow and drop with age",
        ],
    },
    Species {
        id: "peace-lily",
        common_name: "Peace Lily",
        scientific_name: "Spathiphyllum spp.",
        aliases: &["Spathiphyllum", "White Sail Plant"],
        check_frequency_days: 7,
        soil_preference: SoilPreference::Moist,
        light_level: LightLevel::Low,
        care_level: CareLevel::Intermediate,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Drooping leaves",
                cause: "Thirsty! Clear signal",
                solution: "Water immediately. Leaves will perk up within hours.",
            },
            CommonIssue {
                symptom: "Brown leaf tips",
                cause: "Low humidity, chlorine in water, or underwatering",
                solution: "Use filtered water. Increase humidity. Water more consistently.",
            },
            CommonIssue {
                symptom: "Yellow leaves",
                cause: "Overwatering or aging",
                solution: "Let soil dry slightly more. Remove yellow leaves.",
            },
            CommonIssue {
                symptom: "No flowers",
                cause: "Insufficient light or young plant",
                solution: "Move to brighter location. Be patient - blooms come with maturity.",
            },
        ],
        quick_tips: &[
            "Excellent for beginners - tells you when thirsty",
            "Non-toxic appearance but actually toxic to pets",
            "White \"flowers\" are actually modified leaves",
            "One of NASA's top air-purifying plants",
        ],
    },
    Species {
        id: "philodendron",
        common_name: "Philodendron",
        scientific_name: "Philodendron spp.",
        aliases: &["Heartleaf Philodendron", "Brasil Philodendron"],
        check_frequency_days: 7,
        soil_preference: SoilPreference::SlightlyMoist,
        light_level: LightLevel::Medium,
        care_level: CareLevel::Intermediate,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Yellow leaves",
                cause: "Overwatering",
                solution: "Let soil dry more between waterings. Check drainage.",
            },
            CommonIssue {
                symptom: "Leggy growth",
                cause: "Insufficient light",
                solution: "Move to brighter location. Prune to encourage bushiness.",
            },
        ],
        quick_tips: &[
            "Similar care to Pothos",
            "Can be trained to climb or trail",
            "Propagates easily in water",
            "Grows quickly in good conditions",
        ],
    },
    Species {
        id: "fiddle-leaf-fig",
        common_name: "Fiddle Leaf Fig",
        scientific_name: "Ficus lyrata",
        aliases: &["Fiddle Leaf", "FLF"],
        check_frequency_days: 7,
        soil_preference: SoilPreference::SlightlyMoist,
        light_level: LightLevel::BrightIndirect,
        care_level: CareLevel::Advanced,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Brown spots on leaves",
                cause: "Inconsistent watering, root rot, or bacterial infection",
                solution: "Establish consistent watering schedule. Ensure good drainage. Remove affected leaves.",
            },
            CommonIssue {
                symptom: "Dropping leaves",
                cause: "Change in environment, drafts, or watering issues",
                solution: "Avoid moving plant. Keep away from AC/heating vents. Maintain consistent care.",
            },
            CommonIssue {
                symptom: "Brown edges",
                cause: "Low humidity or underwatering",
                solution: "Increase humidity. Check watering - soil should not completely dry out.",
            },
        ],
        quick_tips: &[
            "Very particular about consistency",
            "Don't move it once you find a good spot",
            "Wipe leaves weekly - they collect dust",
            "Rotate 1/4 turn each week for even growth",
        ],
    },
    Species {
        id: "succulent",
        common_name: "Succulents",
        scientific_name: "Various genera",
        aliases: &["Echeveria", "Sedum", "Jade Plant", "Haworthia"],
        check_frequency_days: 14,
        soil_preference: SoilPreference::Dry,
        light_level: LightLevel::BrightIndirect,
        care_level: CareLevel::Intermediate,
        pet_safe: true,
        common_issues: &[
            CommonIssue {
                symptom: "Mushy, translucent leaves",
                cause: "Overwatering - fatal for succulents",
                solution: "Stop watering. May be too late. Propagate healthy leaves if possible.",
            },
            CommonIssue {
                symptom: "Stretched, leggy growth",
                cause: "Not enough light",
                solution: "Move to much brighter location or add grow light.",
            },
            CommonIssue {
                symptom: "Shriveled leaves",
                cause: "Underwatered (rare)",
                solution: "Water thoroughly. Wait for soil to fully dry before next watering.",
            },
        ],
        quick_tips: &[
            "When in doubt, don't water",
            "Need well-draining cactus/succulent soil",
            "Drainage holes essential",
            "Many varieties can be propagated from single leaves",
        ],
    },
    Species {
        id: "cactus",
        common_name: "Cactus",
        scientific_name: "Various genera",
        aliases: &["Desert Cactus", "Prickly Pear", "Barrel Cactus"],
        check_frequency_days: 21,
        soil_preference: SoilPreference::Dry,
        light_level: LightLevel::Direct,
        care_level: CareLevel::Intermediate,
        pet_safe: true,
        common_issues: &[
            CommonIssue {
                symptom: "Soft, mushy base",
                cause: "Root rot from overwatering",
                solution: "Stop watering. May not be salvageable. Cut healthy top to propagate if possible.",
            },
            CommonIssue {
                symptom: "Wrinkled, shriveled",
                cause: "Severely underwatered (takes months)",
                solution: "Water thoroughly. Should plump up.",
            },
            CommonIssue {
                symptom: "No growth, pale color",
                cause: "Insufficient light",
                solution: "Move to brightest possible location.",
            },
        ],
        quick_tips: &[
            "Extremely low maintenance",
            "Must have well-draining cactus soil",
            "Need winter dormancy (cooler, less water) to bloom",
            "Can survive extreme neglect",
        ],
    },
    Species {
        id: "fern",
        common_name: "Ferns",
        scientific_name: "Various genera",
        aliases: &["Boston Fern", "Maidenhair Fern", "Birds Nest Fern"],
        check_frequency_days: 5,
        soil_preference: SoilPreference::Moist,
        light_level: LightLevel::Medium,
        care_level: CareLevel::Advanced,
        pet_safe: true,
        common_issues: &[
            CommonIssue {
                symptom: "Brown, crispy fronds",
                cause: "Low humidity or letting soil dry out",
                solution: "Increase humidity dramatically. Mist daily. Keep soil moist. Trim dead fronds.",
            },
            CommonIssue {
                symptom: "Yellow fronds",
                cause: "Overwatering or poor drainage",
                solution: "Ensure pot has drainage. Let soil surface dry slightly between waterings.",
            },
        ],
        quick_tips: &[
            "Challenging - need high humidity",
            "Perfect for humid bathrooms",
            "Mist daily if humidity is low",
            "Non-toxic to pets",
        ],
    },
    Species {
        id: "money-tree",
        common_name: "Money Tree",
        scientific_name: "Pachira aquatica",
        aliases: &["Pachira", "Guiana Chestnut", "Braided Money Tree"],
        check_frequency_days: 7,
        soil_preference: SoilPreference::SlightlyMoist,
        light_level: LightLevel::BrightIndirect,
        care_level: CareLevel::Intermediate,
        pet_safe: false,
        common_issues: &[
            CommonIssue {
                symptom: "Yellow leaves falling",
                cause: "Overwatering or temperature shock",
                solution: "Let soil dry more between waterings. Avoid cold drafts.",
            },
            CommonIssue {
                symptom: "Brown leaf tips",
                cause: "Low humidity or inconsistent watering",
                solution: "Increase humidity. Maintain consistent watering schedule.",
            },
        ],
        quick_tips: &[
            "Trunk is usually braided when young",
            "Rotates toward light - rotate plant regularly",
            "Can grow 6-8 feet indoors",
            "Believed to bring good luck and prosperity",
        ],
    },
];

static BY_ID: Lazy<HashMap<&'static str, &'static Species>> =
    Lazy::new(|| SPECIES.iter().map(|s| (s.id, s)).collect());

#[must_use]
pub fn find(id: &str) -> Option<&'static Species> {
    BY_ID.get(id).copied()
}

/// Case-insensitive match against common name, scientific name, and
/// aliases, in catalog order.
#[must_use]
pub fn search(query: &str) -> Vec<&'static Species> {
    let query = query.to_lowercase();
    SPECIES
        .iter()
        .filter(|s| {
            s.common_name.to_lowercase().contains(&query)
                || s.scientific_name.to_lowercase().contains(&query)
                || s.aliases
                    .iter()
                    .any(|alias| alias.to_lowercase().contains(&query))
        })
        .collect()
}
