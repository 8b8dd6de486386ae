use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Spectral classification of a star, stored as the `spectral_class` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "spectral_class")]
#[serde(rename_all = "snake_case")]
pub enum SpectralClass {
    #[sea_orm(string_value = "class_a")]
    ClassA,
    #[sea_orm(string_value = "class_b")]
    ClassB,
    #[sea_orm(string_value = "class_f")]
    ClassF,
    #[sea_orm(string_value = "class_g")]
    ClassG,
    #[sea_orm(string_value = "class_k")]
    ClassK,
    #[sea_orm(string_value = "class_m")]
    ClassM,
    #[sea_orm(string_value = "class_o")]
    ClassO,
    #[sea_orm(string_value = "red_giant")]
    RedGiant,
    #[sea_orm(string_value = "yellow_giant")]
    YellowGiant,
    #[sea_orm(string_value = "white_giant")]
    WhiteGiant,
    #[sea_orm(string_value = "blue_giant")]
    BlueGiant,
    #[sea_orm(string_value = "white_dwarf")]
    WhiteDwarf,
    #[sea_orm(string_value = "black_hole")]
    BlackHole,
    #[sea_orm(string_value = "neutron")]
    Neutron,
}
