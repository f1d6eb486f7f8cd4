//! Product categories and the material-to-category inference rules.
//!
//! Categories form a closed set: every product lands in exactly one variant,
//! with [`Category::Other`] as the fallback. Inference walks an ordered
//! keyword rule table; the built-in table can be replaced from a YAML file
//! (`config/categories.yaml`) so new materials can be mapped without a code
//! change. Rule order in the file is the match order.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Catalog category a product is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Boxes,
    Film,
    Tape,
    PaintCoatings,
    Metal,
    Construction,
    Insulation,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Boxes => write!(f, "Boxes"),
            Category::Film => write!(f, "Film"),
            Category::Tape => write!(f, "Tape"),
            Category::PaintCoatings => write!(f, "Paint & Coatings"),
            Category::Metal => write!(f, "Metal"),
            Category::Construction => write!(f, "Construction"),
            Category::Insulation => write!(f, "Insulation"),
            Category::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boxes" => Ok(Category::Boxes),
            "film" => Ok(Category::Film),
            "tape" => Ok(Category::Tape),
            "paint-coatings" | "paint&coatings" => Ok(Category::PaintCoatings),
            "metal" => Ok(Category::Metal),
            "construction" => Ok(Category::Construction),
            "insulation" => Ok(Category::Insulation),
            "other" => Ok(Category::Other),
            other => Err(format!("unknown category: '{other}'")),
        }
    }
}

/// One inference rule: if the material contains any of `keywords`
/// (case-insensitive substring), the product belongs to `category`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keywords: Vec<String>,
    pub category: Category,
}

/// File shape for `config/categories.yaml`.
#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub rules: Vec<CategoryRule>,
}

/// Ordered material-to-category rule table.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        let rule = |keywords: &[&str], category: Category| CategoryRule {
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            category,
        };
        Self {
            rules: vec![
                rule(&["cardboard", "board"], Category::Boxes),
                rule(&["polyethylene"], Category::Film),
                rule(&["polypropylene"], Category::Tape),
                rule(&["paint", "lacquer"], Category::PaintCoatings),
                rule(&["metal", "steel"], Category::Metal),
                rule(&["cement", "concrete"], Category::Construction),
                rule(&["insulation"], Category::Insulation),
            ],
        }
    }
}

impl CategoryRules {
    /// Maps a material string to its category.
    ///
    /// Total and deterministic: every input (including the empty string and
    /// the `"Unspecified"` default) yields a category, with
    /// [`Category::Other`] when no rule matches. The first matching rule
    /// wins, so rule order is significant.
    #[must_use]
    pub fn classify(&self, material: &str) -> Category {
        let needle = material.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| needle.contains(k.as_str())))
            .map_or(Category::Other, |rule| rule.category)
    }

    /// Returns the rules in match order.
    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

/// Load and validate the category rule table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_rules(path: &Path) -> Result<CategoryRules, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CategoriesFile = serde_yaml::from_str(&content)?;

    validate_rules(&file)?;

    // Keywords are matched lower-case; normalise once at load time.
    let rules = file
        .rules
        .into_iter()
        .map(|rule| CategoryRule {
            keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
            category: rule.category,
        })
        .collect();

    Ok(CategoryRules { rules })
}

fn validate_rules(file: &CategoriesFile) -> Result<(), ConfigError> {
    if file.rules.is_empty() {
        return Err(ConfigError::Validation(
            "categories file must define at least one rule".to_string(),
        ));
    }

    let mut seen_keywords = HashSet::new();

    for rule in &file.rules {
        if rule.keywords.is_empty() {
            return Err(ConfigError::Validation(format!(
                "rule for category '{}' has no keywords",
                rule.category
            )));
        }

        for keyword in &rule.keywords {
            if keyword.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "rule for category '{}' contains a blank keyword",
                    rule.category
                )));
            }

            if !seen_keywords.insert(keyword.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate keyword: '{keyword}'"
                )));
            }
        }
    }

    Ok(())
}
