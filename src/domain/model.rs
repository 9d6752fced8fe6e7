use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Universite {
    pub id_universite: Option<i64>,
    pub nom_universite: String,
    pub adresse: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bloc {
    pub id_bloc: Option<i64>,
    pub nom_bloc: String,
    pub capacite_bloc: i64,
}

/// 宿舍（foyer）紀錄。
///
/// 識別碼由持久層指派，之後不可變更；因此只提供 [`Foyer::with_id`]
/// 作為建構時指定識別碼的途徑，沒有公開的 setter。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Foyer {
    id_foyer: Option<i64>,
    nom_foyer: String,
    capacite_foyer: i64,
    #[serde(default)]
    universite: Option<Universite>,
    #[serde(default)]
    blocs: HashSet<Bloc>,
}

impl Foyer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id_foyer: i64) -> Self {
        Self {
            id_foyer: Some(id_foyer),
            ..Self::default()
        }
    }

    pub fn id_foyer(&self) -> Option<i64> {
        self.id_foyer
    }

    /// 僅供 repository 在首次儲存時使用
    pub(crate) fn assign_id(&mut self, id_foyer: i64) {
        debug_assert!(self.id_foyer.is_none());
        self.id_foyer = Some(id_foyer);
    }

    pub fn nom_foyer(&self) -> &str {
        &self.nom_foyer
    }

    pub fn set_nom_foyer(&mut self, nom_foyer: impl Into<String>) {
        self.nom_foyer = nom_foyer.into();
    }

    pub fn capacite_foyer(&self) -> i64 {
        self.capacite_foyer
    }

    pub fn set_capacite_foyer(&mut self, capacite_foyer: i64) {
        self.capacite_foyer = capacite_foyer;
    }

    pub fn universite(&self) -> Option<&Universite> {
        self.universite.as_ref()
    }

    pub fn set_universite(&mut self, universite: Option<Universite>) {
        self.universite = universite;
    }

    pub fn blocs(&self) -> &HashSet<Bloc> {
        &self.blocs
    }

    pub fn set_blocs(&mut self, blocs: HashSet<Bloc>) {
        self.blocs = blocs;
    }
}

impl fmt::Display for Foyer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id_foyer {
            Some(id) => write!(f, "Foyer(idFoyer={}", id)?,
            None => write!(f, "Foyer(idFoyer=null")?,
        }
        write!(
            f,
            ", nomFoyer={}, capaciteFoyer={})",
            self.nom_foyer, self.capacite_foyer
        )
    }
}
