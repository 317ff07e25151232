pub mod clock;
pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use survey_entities::{id::*, survey_comment::*, time::*};
}
