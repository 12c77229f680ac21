//! Default query texts, used when the configuration does not override them

/// Settlements of the Netherlands, reached through municipalities
/// (Q2039348), with their province and country. Labels in Dutch.
pub const SETTLEMENT_QUERY: &str = r#"SELECT ?settlement ?settlementLabel ?municipality ?municipalityLabel ?province ?provinceLabel ?country ?countryLabel ?coordinates WHERE {
    ?municipality wdt:P31 wd:Q2039348 .
    ?settlement wdt:P625 ?coordinates .
    ?municipality wdt:P1383 ?settlement .
    ?municipality wdt:P17 ?country .
    ?municipality wdt:P131 ?province .

    SERVICE wikibase:label {
        bd:serviceParam wikibase:language "nl"
    }
}"#;

/// Provinces of the Netherlands (Q134390)
pub const REGION_QUERY: &str = r#"SELECT ?province ?provinceLabel WHERE {
    ?province wdt:P31 wd:Q134390 .

    SERVICE wikibase:label {
        bd:serviceParam wikibase:language "nl"
    }
}"#;

/// Field of [`REGION_QUERY`] holding the region name
pub const REGION_FIELD: &str = "provinceLabel";

pub const WIKIDATA_ENDPOINT: &str = "https://query.wikidata.org/sparql";
