pub mod activities_repo;

pub use activities_repo::ActivitiesRepo;
