//! Application use cases

pub mod resolve;
pub mod view_all;

pub use resolve::{ResolvedUseCase, UseCaseResolver};
pub use view_all::{
    StatsViewAllViewModel, StatsViewAllViewModelFactory, StatsViewAllViewModelFactoryBuilder,
    ViewAllDependencies, assemble,
};
