use anyhow::{bail, Context};
use gembazaar_core::{Card, Catalog, GemColor, Gems, RulesConfig, Tier};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CATALOG_FILE: &str = "gamedata.tsv";
pub const RULES_FILE: &str = "rules.json";

const CATALOG_FIELDS: usize = 8;

#[derive(Debug, Clone)]
pub struct Assets {
    pub rules: RulesConfig,
    pub catalog: Catalog,
}

/// Loads `gamedata.tsv` and, when present, `rules.json` from `dir`.
pub fn load_assets(dir: &Path) -> anyhow::Result<Assets> {
    load_assets_with(dir, None, None)
}

/// Like [`load_assets`], with explicit files taking the place of the ones in
/// `dir`.
pub fn load_assets_with(
    dir: &Path,
    catalog: Option<&Path>,
    rules: Option<&Path>,
) -> anyhow::Result<Assets> {
    let rules = match rules {
        Some(path) => load_rules(path)?,
        None => {
            let rules_path = dir.join(RULES_FILE);
            if rules_path.exists() {
                load_rules(&rules_path)?
            } else {
                RulesConfig::default()
            }
        }
    };
    let bundled = dir.join(CATALOG_FILE);
    let catalog = load_catalog(catalog.unwrap_or(bundled.as_path()))?;
    Ok(Assets { rules, catalog })
}

pub fn load_rules(path: &Path) -> anyhow::Result<RulesConfig> {
    load_json(path)
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("parse {}", path.display()))
}

/// One card per line: `tier, w, u, g, r, b, bonus, points`, tab separated.
/// Blank lines are skipped.
pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::new();
    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let card = parse_card(line).with_context(|| format!("line {}", index + 1))?;
        catalog.push(card);
    }
    if catalog.is_empty() {
        bail!("catalog has no cards");
    }
    Ok(catalog)
}

pub fn parse_card(line: &str) -> anyhow::Result<Card> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    let [tier, white, blue, green, red, black, bonus, points] = fields.as_slice() else {
        bail!(
            "expected {CATALOG_FIELDS} tab-separated fields, got {}",
            fields.len()
        );
    };
    let tier_number: u8 = parse_field("tier", tier)?;
    let tier =
        Tier::from_number(tier_number).with_context(|| format!("unknown tier {tier_number}"))?;
    let cost = Gems::new([
        parse_field("white cost", white)?,
        parse_field("blue cost", blue)?,
        parse_field("green cost", green)?,
        parse_field("red cost", red)?,
        parse_field("black cost", black)?,
    ]);
    let bonus =
        GemColor::from_code(bonus).with_context(|| format!("unknown bonus colour {bonus:?}"))?;
    let points = parse_field("points", points)?;
    Ok(Card::new(tier, cost, bonus, points))
}

fn parse_field<T>(name: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse::<T>()
        .with_context(|| format!("{name} {value:?} is not a valid number"))
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
