//! Ontario universities offered by the school picker.

use serde::Serialize;

/// Options for the school select, in display order.
pub const UNIVERSITY_OPTIONS: [&str; 25] = [
    "Algoma University",
    "Brock University",
    "Carleton University",
    "King's University College (Western)",
    "Lakehead University",
    "Laurentian University",
    "McMaster University",
    "Nipissing University",
    "OCAD University",
    "Ontario Tech University",
    "Queen's University",
    "Royal Military College of Canada",
    "Toronto Metropolitan University",
    "Trent University",
    "Université de Hearst",
    "Université de Sudbury",
    "University of Guelph",
    "University of Ottawa",
    "University of Sudbury",
    "University of Toronto",
    "University of Waterloo",
    "University of Windsor",
    "Western University",
    "Wilfrid Laurier University",
    "York University",
];

pub fn university_options() -> &'static [&'static str] {
    &UNIVERSITY_OPTIONS
}

/// Campus location for a known university.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Campus {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

const fn campus(name: &'static str, lat: f64, lng: f64) -> Campus {
    Campus { name, lat, lng }
}

const TORONTO: Campus = campus("University of Toronto", 43.6629, -79.3957);
const WATERLOO: Campus = campus("University of Waterloo", 43.4516, -80.4925);
const MCMASTER: Campus = campus("McMaster University", 43.2557, -79.8711);
const WESTERN: Campus = campus("Western University", 42.9849, -81.2453);
const QUEENS: Campus = campus("Queen's University", 44.2253, -76.4953);
const OTTAWA: Campus = campus("University of Ottawa", 45.4215, -75.6972);
const YORK: Campus = campus("York University", 43.7315, -79.5037);
const CARLETON: Campus = campus("Carleton University", 45.3875, -75.6997);
const GUELPH: Campus = campus("University of Guelph", 43.1949, -80.2477);
const TMU: Campus = campus("Toronto Metropolitan University", 43.6629, -79.3957);
const BROCK: Campus = campus("Brock University", 43.2086, -79.7608);
const TRENT: Campus = campus("Trent University", 44.3894, -79.2505);
const LAKEHEAD: Campus = campus("Lakehead University", 48.3809, -89.2477);
const LAURENTIAN: Campus = campus("Laurentian University", 46.5500, -80.7933);
const NIPISSING: Campus = campus("Nipissing University", 46.3091, -79.4608);
const ALGOMA: Campus = campus("Algoma University", 46.4917, -84.3033);
const OCAD: Campus = campus("OCAD University", 43.6589, -79.3957);
const ONTARIO_TECH: Campus = campus("Ontario Tech University", 43.7945, -79.0458);
const KINGS: Campus = campus("King's University College", 42.9849, -81.2453);
const RMC: Campus = campus("Royal Military College of Canada", 44.2253, -76.4953);

// Keys are lower-case; lookups normalise before matching.
const ALIASES: &[(&str, Campus)] = &[
    ("university of toronto", TORONTO),
    ("uoft", TORONTO),
    ("university of waterloo", WATERLOO),
    ("waterloo", WATERLOO),
    ("mcmaster university", MCMASTER),
    ("mcmaster", MCMASTER),
    ("western university", WESTERN),
    ("western", WESTERN),
    ("uwo", WESTERN),
    ("queen's university", QUEENS),
    ("queens", QUEENS),
    ("queensu", QUEENS),
    ("university of ottawa", OTTAWA),
    ("ottawa", OTTAWA),
    ("uottawa", OTTAWA),
    ("york university", YORK),
    ("york", YORK),
    ("yorku", YORK),
    ("carleton university", CARLETON),
    ("carleton", CARLETON),
    ("university of guelph", GUELPH),
    ("guelph", GUELPH),
    ("toronto metropolitan university", TMU),
    ("tmu", TMU),
    ("ryerson", TMU),
    ("brock university", BROCK),
    ("brock", BROCK),
    ("trent university", TRENT),
    ("trent", TRENT),
    ("lakehead university", LAKEHEAD),
    ("lakehead", LAKEHEAD),
    ("laurentian university", LAURENTIAN),
    ("laurentian", LAURENTIAN),
    ("nipissing university", NIPISSING),
    ("nipissing", NIPISSING),
    ("algoma university", ALGOMA),
    ("algoma", ALGOMA),
    ("ocad university", OCAD),
    ("ocad", OCAD),
    ("ontario tech university", ONTARIO_TECH),
    ("ontario tech", ONTARIO_TECH),
    ("uoit", ONTARIO_TECH),
    ("king's university college", KINGS),
    ("kings", KINGS),
    ("royal military college of canada", RMC),
    ("rmc", RMC),
];

/// Resolve a school name or common alias to its campus.
pub fn lookup_university(name: &str) -> Option<Campus> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, campus)| *campus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_aliases_case_insensitively() {
        assert_eq!(lookup_university("UWO").unwrap().name, "Western University");
        assert_eq!(
            lookup_university("  Ryerson ").unwrap().name,
            "Toronto Metropolitan University"
        );
    }

    #[test]
    fn unknown_school_has_no_campus() {
        assert!(lookup_university("Sheridan College").is_none());
        assert!(lookup_university("").is_none());
    }

    #[test]
    fn options_are_unique() {
        let mut sorted = UNIVERSITY_OPTIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), UNIVERSITY_OPTIONS.len());
        assert!(UNIVERSITY_OPTIONS.contains(&"Western University"));
    }
}
