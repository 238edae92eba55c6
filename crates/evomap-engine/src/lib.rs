//! Data model and mutable arrangement for evolution-map strategy exercises.
//!
//! The crate is split in two layers:
//!
//! - [`core`] - immutable building blocks: map coordinates, evolution stages,
//!   sourcing classifications, items and relationships.
//! - [`arrangement`] - the mutable player state ([`Arrangement`]) and the static
//!   exercise configuration ([`Scenario`]).
//!
//! Scoring lives in `evomap-evaluator` and connector geometry in `evomap-router`;
//! both consume the types defined here without mutating them.

pub use self::{arrangement::*, core::*};

pub mod arrangement;
pub mod core;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RelationshipError {
    #[display("relationship endpoints must differ, got `{_0}` twice")]
    SelfLoop(#[error(not(source))] ItemId),
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ArrangementError {
    #[display("unknown item `{_0}`")]
    UnknownItem(#[error(not(source))] ItemId),
    #[display("invalid relationship: {_0}")]
    InvalidRelationship(RelationshipError),
    #[display("relationship `{_0}` already exists")]
    DuplicateRelationship(#[error(not(source))] Relationship),
    #[display("relationship `{_0}` does not exist")]
    MissingRelationship(#[error(not(source))] Relationship),
}

impl From<RelationshipError> for ArrangementError {
    fn from(err: RelationshipError) -> Self {
        Self::InvalidRelationship(err)
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ScenarioError {
    #[display("scenario has no items")]
    NoItems,
    #[display("item `{_0}` is defined more than once")]
    DuplicateItem(#[error(not(source))] ItemId),
    #[display("item `{id}` target position ({x}, {y}) lies outside the map")]
    TargetOutOfBounds { id: ItemId, x: f64, y: f64 },
    #[display("item `{id}` target x {x} is outside the {stage} stage")]
    StageMismatch {
        id: ItemId,
        x: f64,
        stage: EvolutionStage,
    },
    #[display("reference relationship `{_0}` refers to an unknown item")]
    UnknownReferenceItem(#[error(not(source))] Relationship),
    #[display("commodity item `{_0}` is not defined")]
    UnknownCommodityItem(#[error(not(source))] ItemId),
}
