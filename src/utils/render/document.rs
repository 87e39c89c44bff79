// writer-neutral document tree produced by the renderer

use crate::utils::changelog::SectionKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// centered title block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

/// labeled badge, e.g. "v1.0.0"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
}

/// heading plus ordered list for one visible section of a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub items: Vec<String>,
}

impl Section {
    /// heading text with the icon prefixed when one is set
    pub fn display_heading(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.heading),
            None => self.heading.clone(),
        }
    }
}

/// one release card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// identity of the card; the release version
    pub key: String,
    pub badge: Badge,
    pub date: String,
    pub sections: Vec<Section>,
}

impl Card {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// fragment identifier derived from the key: "1.0.0" -> "v1-0-0"
    pub fn anchor(&self) -> String {
        let slug: String = self
            .key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        format!("v{}", slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub note: String,
}

/// complete changelog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub header: Header,
    pub cards: Vec<Card>,
    pub footer: Footer,
}

impl Document {
    pub fn badges(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.badge.label.as_str()).collect()
    }

    pub fn card(&self, key: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.key == key)
    }

    /// keys that appear more than once, or are empty, in card order
    ///
    /// the renderer does not reject these; a hosting layer keyed by version
    /// can use this to surface the identity problem
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for card in &self.cards {
            let key = card.key.as_str();
            if (key.is_empty() || !seen.insert(key)) && !duplicates.contains(&key) {
                duplicates.push(key);
            }
        }
        duplicates
    }

    /// total number of list items across all cards
    pub fn item_count(&self) -> usize {
        self.cards
            .iter()
            .flat_map(|c| c.sections.iter())
            .map(|s| s.items.len())
            .sum()
    }

    /// BLAKE3 digest of the document structure, as lowercase hex
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        // every string and every list is length-prefixed so that moving
        // values between lists changes the digest
        fn count(hasher: &mut blake3::Hasher, len: usize) {
            hasher.update(&(len as u64).to_le_bytes());
        }
        fn field(hasher: &mut blake3::Hasher, value: &str) {
            count(hasher, value.len());
            hasher.update(value.as_bytes());
        }

        field(&mut hasher, &self.header.title);
        field(&mut hasher, &self.header.subtitle);
        count(&mut hasher, self.cards.len());
        for card in &self.cards {
            field(&mut hasher, &card.key);
            field(&mut hasher, &card.badge.label);
            field(&mut hasher, &card.date);
            count(&mut hasher, card.sections.len());
            for section in &card.sections {
                field(&mut hasher, &section.kind.to_string());
                field(&mut hasher, &section.heading);
                field(&mut hasher, section.icon.as_deref().unwrap_or_default());
                count(&mut hasher, section.items.len());
                for item in &section.items {
                    field(&mut hasher, item);
                }
            }
        }
        field(&mut hasher, &self.footer.note);

        hasher.finalize().to_hex().to_string()
    }
}
