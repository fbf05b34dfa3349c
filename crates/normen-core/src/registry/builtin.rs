//! Builtin standards compiled into normen-core
//!
//! The seed table every registry starts from. Deployments extend it with
//! TOML files; entries here cannot be overridden.

use crate::normalize::normalize_identifier;
use crate::record::{Category, RegistryRecord};

fn valid(id: &str, title: &str, latest: &str, category: Category) -> RegistryRecord {
    RegistryRecord::valid(normalize_identifier(id), title, latest, category)
}

fn withdrawn(
    id: &str,
    title: &str,
    latest: &str,
    category: Category,
    replaced_by: &str,
) -> RegistryRecord {
    RegistryRecord::withdrawn(
        normalize_identifier(id),
        title,
        latest,
        category,
        normalize_identifier(replaced_by),
    )
}

/// Returns the builtin records in registry insertion order
pub fn builtin_records() -> Vec<RegistryRecord> {
    vec![
        withdrawn(
            "DIN 1045",
            "Tragwerke aus Beton, Stahlbeton und Spannbeton",
            "2008",
            Category::Ingenieurbau,
            "DIN EN 1992",
        ),
        valid(
            "DIN EN 206",
            "Beton - Festlegung, Eigenschaften, Herstellung und Konformität",
            "2023",
            Category::Hochbau,
        ),
        valid("DIN 4109", "Schallschutz im Hochbau", "2018", Category::Hochbau),
        valid(
            "DIN 18300",
            "VOB Vergabe- und Vertragsordnung für Bauleistungen - Teil C: Erdarbeiten",
            "2019",
            Category::Tiefbau,
        ),
        valid(
            "DIN EN 1990",
            "Eurocode: Grundlagen der Tragwerksplanung",
            "2021",
            Category::Ingenieurbau,
        ),
        valid(
            "DIN 18008",
            "Glas im Bauwesen - Bemessungs- und Konstruktionsregeln",
            "2020",
            Category::Hochbau,
        ),
        valid(
            "VOB Teil A",
            "Vergabe- und Vertragsordnung für Bauleistungen - Teil A: Allgemeine Bestimmungen für die Vergabe von Bauleistungen",
            "2019",
            Category::Projektmanagement,
        ),
        valid(
            "VOB Teil B",
            "Vergabe- und Vertragsordnung für Bauleistungen - Teil B: Allgemeine Vertragsbedingungen",
            "2019",
            Category::Projektmanagement,
        ),
        valid("DIN 276", "Kosten im Bauwesen", "2018", Category::Projektmanagement),
        valid(
            "DIN 1988",
            "Technische Regeln für Trinkwasser-Installationen",
            "2023",
            Category::Tga,
        ),
        valid(
            "VDI 6022",
            "Hygieneanforderungen an Raumlufttechnische Anlagen und Geräte",
            "2018",
            Category::Tga,
        ),
        valid(
            "DIN 18516",
            "Außenwandbekleidungen, hinterlüftet",
            "2010",
            Category::Ausbau,
        ),
        valid(
            "DIN V 18599",
            "Energetische Bewertung von Gebäuden",
            "2018",
            Category::Nachhaltigkeit,
        ),
    ]
}
