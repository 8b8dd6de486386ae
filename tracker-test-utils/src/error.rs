use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error("fixture {0} was not queued before it was referenced")]
    MissingFixture(String),
}
