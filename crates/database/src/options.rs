use std::collections::HashMap;

use crate::pagination::PagingOptions;

/// Which physical database a read goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Repo {
    #[default]
    Primary,
    Replica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Necessity {
    /// Rows without the association are skipped.
    Required,
    /// The association is loaded when present.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchAssociation {
    Bundle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub repo: Repo,
    pub paging: PagingOptions,
    pub necessity_by_association: HashMap<BatchAssociation, Necessity>,
}

impl QueryOptions {
    pub fn with_repo(mut self, repo: Repo) -> Self {
        self.repo = repo;
        self
    }

    pub fn with_paging(mut self, paging: PagingOptions) -> Self {
        self.paging = paging;
        self
    }

    pub fn with_association(mut self, association: BatchAssociation, necessity: Necessity) -> Self {
        self.necessity_by_association.insert(association, necessity);
        self
    }

    pub fn necessity(&self, association: BatchAssociation) -> Option<Necessity> {
        self.necessity_by_association.get(&association).copied()
    }
}
