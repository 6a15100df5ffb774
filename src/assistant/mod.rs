//! Rule-based chat assistant.
//!
//! Questions are folded (lowercase, no accents) and matched against a fixed
//! list of rules; the first rule that applies answers from the snapshot it
//! was given. There is no conversation state.

pub mod text;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    catalog::EquipmentCatalog,
    engine::{self, BureauMatch, DirectionGrouping},
    models::{Equipment, EquipmentField, EquipmentStatus},
};

use text::{contains_phrase, fold, has_stem, rest_after, word_after, words};

/// What the assistant understood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Help,
    SerialLookup,
    StatusCount,
    BureauLookup,
    TypeCount,
    DirectionSummary,
    TotalCount,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AssistantReply {
    pub intent: Intent,
    pub message: String,
}

impl AssistantReply {
    fn new(intent: Intent, message: impl Into<String>) -> Self {
        Self {
            intent,
            message: message.into(),
        }
    }
}

const GREETINGS: [&str; 5] = ["bonjour", "bonsoir", "salut", "hello", "coucou"];
const HELP: [&str; 2] = ["aide", "help"];
const TOTAL: [&str; 3] = ["combien", "total", "nombre"];

const HELP_TEXT: &str = "Je peux répondre à des questions comme : \
    « combien d'imprimantes à la DSI ? », « équipements réformés en stock », \
    « bureau 101 », « numéro de série AB12 » ou « résumé DRH ».";

/// Everything a rule may look at
struct Context<'a> {
    words: Vec<String>,
    records: &'a [Equipment],
    catalog: &'a EquipmentCatalog,
    grouping: DirectionGrouping,
}

impl<'a> Context<'a> {
    /// A direction named in the question, from the data first then the catalog
    fn direction(&self) -> Option<String> {
        self.grouping
            .keys()
            .map(String::as_str)
            .chain(self.catalog.directions().iter().map(String::as_str))
            .find(|d| contains_phrase(&self.words, &fold(d)))
            .map(str::to_string)
    }

    /// Records of `direction`, or all of them
    fn scoped(&self, direction: Option<&str>) -> Vec<&'a Equipment> {
        self.records
            .iter()
            .filter(|r| direction.map_or(true, |d| r.direction.as_deref() == Some(d)))
            .collect()
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count > 1 { many } else { one })
}

fn scope_label(direction: Option<&str>) -> String {
    direction
        .map(|d| format!(" à la {}", d))
        .unwrap_or_default()
}

fn serial_lookup(ctx: &Context) -> Option<AssistantReply> {
    let serial = ["serie", "sn"]
        .iter()
        .find_map(|k| word_after(&ctx.words, k))?
        .to_uppercase();

    let message = match ctx
        .records
        .iter()
        .find(|r| r.numero_serie.as_deref() == Some(serial.as_str()))
    {
        Some(r) => format!(
            "{} : {} {} {}, {} / bureau {}, statut « {} ».",
            serial,
            r.equipment_type.as_deref().unwrap_or("?"),
            r.marque.as_deref().unwrap_or("?"),
            r.modele.as_deref().unwrap_or(""),
            r.direction.as_deref().unwrap_or("?"),
            r.bureau.as_deref().unwrap_or("?"),
            r.statut.as_deref().unwrap_or("?"),
        ),
        None => format!("Aucun équipement avec le numéro de série {}.", serial),
    };
    Some(AssistantReply::new(Intent::SerialLookup, message))
}

fn status_count(ctx: &Context) -> Option<AssistantReply> {
    let functional = has_stem(&ctx.words, &["fonctionn"]);
    let reformed = has_stem(&ctx.words, &["reform"]);
    if !functional && !reformed {
        return None;
    }

    let wanted: Vec<EquipmentStatus> = if functional {
        vec![EquipmentStatus::Functional]
    } else if ctx.words.iter().any(|w| w == "stock") {
        vec![EquipmentStatus::ReformedInStock]
    } else if ctx.words.iter().any(|w| w == "bureau") {
        vec![EquipmentStatus::ReformedInOffice]
    } else {
        EquipmentStatus::ALL
            .into_iter()
            .filter(EquipmentStatus::is_reformed)
            .collect()
    };

    let direction = ctx.direction();
    let scoped = ctx.scoped(direction.as_deref());
    let count = scoped
        .iter()
        .filter(|r| {
            r.statut
                .as_deref()
                .and_then(EquipmentStatus::from_label)
                .map_or(false, |s| wanted.contains(&s))
        })
        .count();

    let labels: Vec<&str> = wanted.iter().map(|s| s.as_str()).collect();
    let message = format!(
        "{}{} sur {} ({} %) : {}.",
        plural(count, "équipement", "équipements"),
        scope_label(direction.as_deref()),
        scoped.len(),
        engine::percentage(count, scoped.len()),
        labels.join(" ou "),
    );
    Some(AssistantReply::new(Intent::StatusCount, message))
}

/// First bureau, in ranked direction order, whose folded label contains the
/// folded query: "bureau reception" finds "Réception", "bureau a 12" finds "A-12"
fn find_bureau<'a>(grouping: &'a DirectionGrouping, query: &str) -> Option<BureauMatch<'a>> {
    engine::rank_directions(grouping)
        .into_iter()
        .find_map(|(direction, stats)| {
            stats
                .bureaux
                .iter()
                .find(|(bureau, _)| words(bureau).join(" ").contains(query))
                .map(|(bureau, records)| BureauMatch {
                    direction,
                    bureau: bureau.as_str(),
                    records: records.as_slice(),
                })
        })
}

fn bureau_lookup(ctx: &Context) -> Option<AssistantReply> {
    let query = rest_after(&ctx.words, "bureau")?;

    let message = match find_bureau(&ctx.grouping, &query) {
        Some(found) => {
            let kinds = engine::tally_by(found.records, EquipmentField::Type)
                .into_iter()
                .map(|(kind, n)| format!("{} × {}", n, kind))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Bureau « {} » ({}) : {}. {}",
                found.bureau,
                found.direction,
                plural(found.records.len(), "équipement", "équipements"),
                kinds
            )
            .trim_end()
            .to_string()
        }
        None => format!("Aucun bureau ne correspond à « {} ».", query),
    };
    Some(AssistantReply::new(Intent::BureauLookup, message))
}

fn type_count(ctx: &Context) -> Option<AssistantReply> {
    // longest names first so "Imprimante Mobile" wins over "Imprimante"
    let mut types: Vec<&str> = ctx.catalog.types().collect();
    types.sort_by_key(|t| std::cmp::Reverse(t.len()));

    let kind = types
        .into_iter()
        .find(|t| contains_phrase(&ctx.words, &fold(t)))?;

    let direction = ctx.direction();
    let scoped = ctx.scoped(direction.as_deref());
    let count = scoped
        .iter()
        .filter(|r| r.equipment_type.as_deref() == Some(kind))
        .count();

    let message = format!(
        "{} de type « {} »{}.",
        plural(count, "équipement", "équipements"),
        kind,
        scope_label(direction.as_deref())
    );
    Some(AssistantReply::new(Intent::TypeCount, message))
}

fn direction_summary(ctx: &Context) -> Option<AssistantReply> {
    let direction = ctx.direction()?;

    let message = match ctx.grouping.get(&direction) {
        Some(stats) => format!(
            "{} : {} dans {}, {} fonctionnels, {} réformés en bureau, \
             {} réformés en stock (taux de réforme {} %).",
            direction,
            plural(stats.total, "équipement", "équipements"),
            plural(stats.bureaux.len(), "bureau", "bureaux"),
            stats.functional_count,
            stats.reformed_in_office_count,
            stats.reformed_in_stock_count,
            engine::reform_rate_percent(stats),
        ),
        None => format!("Aucun équipement enregistré pour la direction {}.", direction),
    };
    Some(AssistantReply::new(Intent::DirectionSummary, message))
}

fn total_count(ctx: &Context) -> Option<AssistantReply> {
    if !ctx.words.iter().any(|w| TOTAL.contains(&w.as_str())) {
        return None;
    }
    let message = format!(
        "Le parc compte {} au total.",
        plural(ctx.records.len(), "équipement", "équipements")
    );
    Some(AssistantReply::new(Intent::TotalCount, message))
}

/// Answer `question` from `records`
pub fn answer(
    question: &str,
    records: &[Equipment],
    catalog: &EquipmentCatalog,
) -> AssistantReply {
    let ctx = Context {
        words: words(question),
        records,
        catalog,
        grouping: engine::group_by_direction_and_bureau(records),
    };

    if ctx.words.is_empty() {
        return AssistantReply::new(Intent::Unknown, "Posez-moi une question sur le parc.");
    }

    if ctx.words.len() <= 3 && GREETINGS.contains(&ctx.words[0].as_str()) {
        return AssistantReply::new(
            Intent::Greeting,
            "Bonjour ! Que voulez-vous savoir sur le parc informatique ?",
        );
    }

    if ctx.words.iter().any(|w| HELP.contains(&w.as_str())) {
        return AssistantReply::new(Intent::Help, HELP_TEXT);
    }

    let rules: [fn(&Context) -> Option<AssistantReply>; 6] = [
        serial_lookup,
        status_count,
        bureau_lookup,
        type_count,
        direction_summary,
        total_count,
    ];

    rules
        .iter()
        .find_map(|rule| rule(&ctx))
        .unwrap_or_else(|| {
            AssistantReply::new(
                Intent::Unknown,
                format!("Je n'ai pas compris la question. {}", HELP_TEXT),
            )
        })
}
