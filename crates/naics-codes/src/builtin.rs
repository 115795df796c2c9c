//! Built-in 2022 NAICS reference data and the bundled rule definition.
//!
//! The embedded table covers the 2022 US sectors and subsectors (2- and
//! 3-digit codes, including the combined sectors 31-33, 44-45 and 48-49).
//! Full 6-digit editions are loaded from CSV via [`crate::load_code_set_csv`].

use std::collections::BTreeMap;

use naics_model::{
    Backend, BackendSpec, Cell, CodeSet, ExampleFixture, ExampleTest, ExpectedOutcome,
    RuleDefinition, RuleMetadata,
};

/// Rule identifier of the bundled NAICS membership rule.
pub const NAICS_RULE_NAME: &str = "expect_column_values_to_be_in_naics_code_set";

const NAICS_SOURCE: &str = "https://www.census.gov/naics/";

/// 2022 NAICS US sectors and subsectors.
const NAICS_2022: &[(&str, &str)] = &[
    ("11", "Agriculture, Forestry, Fishing and Hunting"),
    ("111", "Crop Production"),
    ("112", "Animal Production and Aquaculture"),
    ("113", "Forestry and Logging"),
    ("114", "Fishing, Hunting and Trapping"),
    ("115", "Support Activities for Agriculture and Forestry"),
    ("21", "Mining, Quarrying, and Oil and Gas Extraction"),
    ("211", "Oil and Gas Extraction"),
    ("212", "Mining (except Oil and Gas)"),
    ("213", "Support Activities for Mining"),
    ("22", "Utilities"),
    ("221", "Utilities"),
    ("23", "Construction"),
    ("236", "Construction of Buildings"),
    ("237", "Heavy and Civil Engineering Construction"),
    ("238", "Specialty Trade Contractors"),
    ("31-33", "Manufacturing"),
    ("311", "Food Manufacturing"),
    ("312", "Beverage and Tobacco Product Manufacturing"),
    ("313", "Textile Mills"),
    ("314", "Textile Product Mills"),
    ("315", "Apparel Manufacturing"),
    ("316", "Leather and Allied Product Manufacturing"),
    ("321", "Wood Product Manufacturing"),
    ("322", "Paper Manufacturing"),
    ("323", "Printing and Related Support Activities"),
    ("324", "Petroleum and Coal Products Manufacturing"),
    ("325", "Chemical Manufacturing"),
    ("326", "Plastics and Rubber Products Manufacturing"),
    ("327", "Nonmetallic Mineral Product Manufacturing"),
    ("331", "Primary Metal Manufacturing"),
    ("332", "Fabricated Metal Product Manufacturing"),
    ("333", "Machinery Manufacturing"),
    ("334", "Computer and Electronic Product Manufacturing"),
    ("335", "Electrical Equipment, Appliance, and Component Manufacturing"),
    ("336", "Transportation Equipment Manufacturing"),
    ("337", "Furniture and Related Product Manufacturing"),
    ("339", "Miscellaneous Manufacturing"),
    ("42", "Wholesale Trade"),
    ("423", "Merchant Wholesalers, Durable Goods"),
    ("424", "Merchant Wholesalers, Nondurable Goods"),
    ("425", "Wholesale Trade Agents and Brokers"),
    ("44-45", "Retail Trade"),
    ("441", "Motor Vehicle and Parts Dealers"),
    ("444", "Building Material and Garden Equipment and Supplies Dealers"),
    ("445", "Food and Beverage Retailers"),
    ("449", "Furniture, Home Furnishings, Electronics, and Appliance Retailers"),
    ("455", "General Merchandise Retailers"),
    ("456", "Health and Personal Care Retailers"),
    ("457", "Gasoline Stations and Fuel Dealers"),
    ("458", "Clothing, Clothing Accessories, Shoe, and Jewelry Retailers"),
    (
        "459",
        "Sporting Goods, Hobby, Musical Instrument, Book, and Miscellaneous Retailers",
    ),
    ("48-49", "Transportation and Warehousing"),
    ("481", "Air Transportation"),
    ("482", "Rail Transportation"),
    ("483", "Water Transportation"),
    ("484", "Truck Transportation"),
    ("485", "Transit and Ground Passenger Transportation"),
    ("486", "Pipeline Transportation"),
    ("487", "Scenic and Sightseeing Transportation"),
    ("488", "Support Activities for Transportation"),
    ("491", "Postal Service"),
    ("492", "Couriers and Messengers"),
    ("493", "Warehousing and Storage"),
    ("51", "Information"),
    ("512", "Motion Picture and Sound Recording Industries"),
    ("513", "Publishing Industries"),
    ("516", "Broadcasting and Content Providers"),
    ("517", "Telecommunications"),
    (
        "518",
        "Computing Infrastructure Providers, Data Processing, Web Hosting, and Related Services",
    ),
    (
        "519",
        "Web Search Portals, Libraries, Archives, and Other Information Services",
    ),
    ("52", "Finance and Insurance"),
    ("521", "Monetary Authorities-Central Bank"),
    ("522", "Credit Intermediation and Related Activities"),
    (
        "523",
        "Securities, Commodity Contracts, and Other Financial Investments and Related Activities",
    ),
    ("524", "Insurance Carriers and Related Activities"),
    ("525", "Funds, Trusts, and Other Financial Vehicles"),
    ("53", "Real Estate and Rental and Leasing"),
    ("531", "Real Estate"),
    ("532", "Rental and Leasing Services"),
    (
        "533",
        "Lessors of Nonfinancial Intangible Assets (except Copyrighted Works)",
    ),
    ("54", "Professional, Scientific, and Technical Services"),
    ("541", "Professional, Scientific, and Technical Services"),
    ("55", "Management of Companies and Enterprises"),
    ("551", "Management of Companies and Enterprises"),
    (
        "56",
        "Administrative and Support and Waste Management and Remediation Services",
    ),
    ("561", "Administrative and Support Services"),
    ("562", "Waste Management and Remediation Services"),
    ("61", "Educational Services"),
    ("611", "Educational Services"),
    ("62", "Health Care and Social Assistance"),
    ("621", "Ambulatory Health Care Services"),
    ("622", "Hospitals"),
    ("623", "Nursing and Residential Care Facilities"),
    ("624", "Social Assistance"),
    ("71", "Arts, Entertainment, and Recreation"),
    ("711", "Performing Arts, Spectator Sports, and Related Industries"),
    ("712", "Museums, Historical Sites, and Similar Institutions"),
    ("713", "Amusement, Gambling, and Recreation Industries"),
    ("72", "Accommodation and Food Services"),
    ("721", "Accommodation"),
    ("722", "Food Services and Drinking Places"),
    ("81", "Other Services (except Public Administration)"),
    ("811", "Repair and Maintenance"),
    ("812", "Personal and Laundry Services"),
    (
        "813",
        "Religious, Grantmaking, Civic, Professional, and Similar Organizations",
    ),
    ("814", "Private Households"),
    ("92", "Public Administration"),
    ("921", "Executive, Legislative, and Other General Government Support"),
    ("922", "Justice, Public Order, and Safety Activities"),
    ("923", "Administration of Human Resource Programs"),
    ("924", "Administration of Environmental Quality Programs"),
    (
        "925",
        "Administration of Housing Programs, Urban Planning, and Community Development",
    ),
    ("926", "Administration of Economic Programs"),
    ("927", "Space Research and Technology"),
    ("928", "National Security and International Affairs"),
];

/// The built-in 2022 NAICS sector/subsector code set.
pub fn naics_2022() -> CodeSet {
    let mut set =
        CodeSet::new("2022 NAICS US sectors and subsectors").with_source(NAICS_SOURCE);
    for (code, title) in NAICS_2022 {
        set.insert(code, title);
    }
    set
}

/// The bundled NAICS membership rule: reference set, metadata, and the
/// example fixtures that double as its regression tests.
pub fn builtin_rule() -> RuleDefinition {
    RuleDefinition {
        name: NAICS_RULE_NAME.to_string(),
        code_set: naics_2022(),
        metadata: RuleMetadata {
            tags: vec!["set-based".to_string(), "naics".to_string()],
            contributors: vec!["@trial-submission-tools".to_string()],
        },
        examples: vec![example_fixture()],
    }
}

fn example_fixture() -> ExampleFixture {
    let mut data = BTreeMap::new();
    data.insert(
        "2022 NAICS US Code, String".to_string(),
        ["11", "21", "311", "42", "51"]
            .into_iter()
            .map(|code| Cell::Text(code.to_string()))
            .collect(),
    );
    data.insert(
        "2022 NAICS US Code, Float".to_string(),
        [11.0, 21.0, 311.0, 42.0, 51.0]
            .into_iter()
            .map(Cell::Float)
            .collect(),
    );
    data.insert(
        "2022 NAICS US Code, Integer".to_string(),
        [11, 21, 311, 42, 51].into_iter().map(Cell::Int).collect(),
    );
    // Invalid codes sit at positions 1, 3, 5 and 7: "31" and "41" are not
    // codes on their own (the sectors are 31-33 and 42), "112123" and "1"
    // are out of range.
    data.insert(
        "2022 NAICS US Code, Mixed Validity".to_string(),
        ["11", "112123", "21", "31", "311", "41", "42", "1"]
            .into_iter()
            .map(|code| Cell::Text(code.to_string()))
            .collect(),
    );

    ExampleFixture {
        data,
        tests: vec![
            ExampleTest {
                title: "positive_test_string".to_string(),
                column: "2022 NAICS US Code, String".to_string(),
                expected: ExpectedOutcome {
                    success: true,
                    unexpected_index_list: None,
                },
                include_in_gallery: true,
            },
            ExampleTest {
                title: "positive_test_integer".to_string(),
                column: "2022 NAICS US Code, Integer".to_string(),
                expected: ExpectedOutcome {
                    success: true,
                    unexpected_index_list: None,
                },
                include_in_gallery: true,
            },
            ExampleTest {
                title: "positive_test_float".to_string(),
                column: "2022 NAICS US Code, Float".to_string(),
                expected: ExpectedOutcome {
                    success: true,
                    unexpected_index_list: None,
                },
                include_in_gallery: true,
            },
            ExampleTest {
                title: "negative_test".to_string(),
                column: "2022 NAICS US Code, Mixed Validity".to_string(),
                expected: ExpectedOutcome {
                    success: false,
                    unexpected_index_list: Some(vec![1, 3, 5, 7]),
                },
                include_in_gallery: true,
            },
        ],
        backends: vec![
            BackendSpec::new(Backend::InMemory),
            BackendSpec::new(Backend::Sql).with_dialects(["sqlite", "postgresql"]),
            BackendSpec::new(Backend::DataFrame),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_contains_sectors_and_subsectors() {
        let set = naics_2022();
        assert!(set.len() > 100);
        assert!(set.contains("11"));
        assert!(set.contains("311"));
        assert!(set.contains("31-33"));
        assert!(set.contains("722"));
        assert!(!set.contains("31"));
        assert!(!set.contains("41"));
    }

    #[test]
    fn builtin_rule_examples_reference_their_own_data() {
        let rule = builtin_rule();
        assert_eq!(rule.name, NAICS_RULE_NAME);
        for fixture in &rule.examples {
            for test in &fixture.tests {
                assert!(
                    fixture.data.contains_key(&test.column),
                    "test {} names a missing column",
                    test.title
                );
            }
        }
    }
}
