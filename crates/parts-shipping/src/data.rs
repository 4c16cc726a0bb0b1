//! Compiled-in destination list and rates from the Sharjah hub.
//!
//! Costs are whole AED per parcel, days are door-to-door transit estimates.

use crate::country::Region;
use crate::table::{CountryRecord, RateEntry};

struct Seed {
    code: &'static str,
    name: &'static str,
    localized_name: &'static str,
    region: Region,
    supported: bool,
    air: Option<(u32, u32)>,
    land: Option<(u32, u32)>,
}

const fn seed(
    code: &'static str,
    name: &'static str,
    localized_name: &'static str,
    region: Region,
    air: Option<(u32, u32)>,
    land: Option<(u32, u32)>,
) -> Seed {
    Seed {
        code,
        name,
        localized_name,
        region,
        supported: true,
        air,
        land,
    }
}

const fn suspended(
    code: &'static str,
    name: &'static str,
    localized_name: &'static str,
    region: Region,
    air: Option<(u32, u32)>,
    land: Option<(u32, u32)>,
) -> Seed {
    Seed {
        code,
        name,
        localized_name,
        region,
        supported: false,
        air,
        land,
    }
}

use Region::*;

#[rustfmt::skip]
const SEEDS: &[Seed] = &[
    // Gulf: trucked from the hub as well as flown.
    seed("AE", "United Arab Emirates", "الإمارات العربية المتحدة", Gulf, Some((50, 1)), Some((30, 1))),
    seed("SA", "Saudi Arabia", "المملكة العربية السعودية", Gulf, Some((75, 2)), Some((50, 3))),
    seed("OM", "Oman", "سلطنة عمان", Gulf, Some((65, 2)), Some((45, 3))),
    seed("QA", "Qatar", "قطر", Gulf, Some((70, 2)), Some((55, 3))),
    seed("BH", "Bahrain", "البحرين", Gulf, Some((70, 2)), Some((55, 4))),
    seed("KW", "Kuwait", "الكويت", Gulf, Some((80, 2)), Some((60, 4))),
    suspended("YE", "Yemen", "اليمن", Gulf, Some((160, 6)), Some((120, 9))),

    // Levant & Iraq
    seed("JO", "Jordan", "الأردن", Levant, Some((110, 3)), Some((90, 6))),
    seed("IQ", "Iraq", "العراق", Levant, Some((130, 4)), Some((100, 7))),
    seed("LB", "Lebanon", "لبنان", Levant, Some((120, 3)), None),
    seed("PS", "Palestine", "فلسطين", Levant, Some((140, 5)), None),
    suspended("SY", "Syria", "سوريا", Levant, Some((150, 5)), None),

    // North Africa
    seed("EG", "Egypt", "مصر", NorthAfrica, Some((110, 3)), None),
    seed("MA", "Morocco", "المغرب", NorthAfrica, Some((165, 5)), None),
    seed("DZ", "Algeria", "الجزائر", NorthAfrica, Some((170, 6)), None),
    seed("TN", "Tunisia", "تونس", NorthAfrica, Some((160, 5)), None),
    seed("MR", "Mauritania", "موريتانيا", NorthAfrica, Some((230, 8)), None),
    suspended("LY", "Libya", "ليبيا", NorthAfrica, Some((170, 6)), None),
    suspended("SD", "Sudan", "السودان", NorthAfrica, Some((180, 7)), None),

    // East Africa
    seed("KE", "Kenya", "كينيا", EastAfrica, Some((180, 5)), None),
    seed("ET", "Ethiopia", "إثيوبيا", EastAfrica, Some((190, 6)), None),
    seed("TZ", "Tanzania", "تنزانيا", EastAfrica, Some((195, 6)), None),
    seed("UG", "Uganda", "أوغندا", EastAfrica, Some((200, 7)), None),
    seed("DJ", "Djibouti", "جيبوتي", EastAfrica, Some((170, 5)), None),
    seed("SO", "Somalia", "الصومال", EastAfrica, Some((210, 8)), None),

    // West Africa
    seed("NG", "Nigeria", "نيجيريا", WestAfrica, Some((220, 7)), None),
    seed("GH", "Ghana", "غانا", WestAfrica, Some((215, 7)), None),
    seed("SN", "Senegal", "السنغال", WestAfrica, Some((230, 8)), None),
    seed("CI", "Côte d'Ivoire", "ساحل العاج", WestAfrica, Some((225, 8)), None),

    // Central & Southern Africa
    seed("ZA", "South Africa", "جنوب أفريقيا", SouthernAfrica, Some((240, 7)), None),
    seed("AO", "Angola", "أنغولا", SouthernAfrica, Some((250, 9)), None),
    seed("CD", "DR Congo", "الكونغو الديمقراطية", SouthernAfrica, Some((260, 10)), None),
];

fn entry(pair: Option<(u32, u32)>) -> Option<RateEntry> {
    pair.map(|(cost, days)| RateEntry { cost, days })
}

/// Seed rows as owned records.
pub(crate) fn seed_records() -> Vec<CountryRecord> {
    SEEDS
        .iter()
        .map(|s| CountryRecord {
            code: s.code.to_string(),
            name: s.name.to_string(),
            localized_name: s.localized_name.to_string(),
            region: s.region,
            supported: s.supported,
            air: entry(s.air),
            land: entry(s.land),
        })
        .collect()
}
