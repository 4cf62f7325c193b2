//! Foreign-key and unique-key tables for the sourcing schema.
//!
//! These edges are the only integrity mechanism in the system: there is no
//! application-level validation layer. Essential children (sensitive data,
//! org membership, pipeline stages, scores) restrict deletion of their parent;
//! auxiliary enrichment rows null out the reference instead. Every edge
//! cascades on update.

use std::fmt;

/// Referential action taken on the child row when its parent changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefAction {
    Cascade,
    Restrict,
    SetNull,
}

impl RefAction {
    pub fn as_sql(self) -> &'static str {
        match self {
            RefAction::Cascade => "CASCADE",
            RefAction::Restrict => "RESTRICT",
            RefAction::SetNull => "SET NULL",
        }
    }
}

impl fmt::Display for RefAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// One parent → child edge. Parents are always referenced by `id`, and every
/// edge cascades on update. Only `SET NULL` edges sit on nullable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub child: &'static str,
    pub column: &'static str,
    pub parent: &'static str,
    pub on_delete: RefAction,
}

impl ForeignKey {
    pub fn constraint_name(&self) -> String {
        format!("{}_{}_fkey", self.child, self.column)
    }

    /// Renders the edge as a `CONSTRAINT ... FOREIGN KEY` table clause.
    #[cfg(test)]
    pub fn to_sql(&self) -> String {
        format!(
            "CONSTRAINT \"{}\" FOREIGN KEY (\"{}\") REFERENCES \"{}\" (\"id\") ON DELETE {} ON UPDATE CASCADE",
            self.constraint_name(),
            self.column,
            self.parent,
            self.on_delete,
        )
    }
}

const fn set_null(child: &'static str, column: &'static str, parent: &'static str) -> ForeignKey {
    ForeignKey {
        child,
        column,
        parent,
        on_delete: RefAction::SetNull,
    }
}

const fn restrict(child: &'static str, column: &'static str, parent: &'static str) -> ForeignKey {
    ForeignKey {
        child,
        column,
        parent,
        on_delete: RefAction::Restrict,
    }
}

const fn cascade(child: &'static str, column: &'static str, parent: &'static str) -> ForeignKey {
    ForeignKey {
        child,
        column,
        parent,
        on_delete: RefAction::Cascade,
    }
}

pub const FOREIGN_KEYS: &[ForeignKey] = &[
    set_null("Profile", "talentPoolId", "TalentPool"),
    restrict("SensitiveProfileData", "profileId", "Profile"),
    restrict("ProfileOrg", "profileId", "Profile"),
    // enrichment
    set_null("SimilarProfile", "profileId", "Profile"),
    set_null("SimilarProfile", "sharedRawProfileId", "SharedRawProfile"),
    set_null("AccomplishmentOrg", "profileId", "Profile"),
    set_null("AccomplishmentOrg", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Activity", "profileId", "Profile"),
    set_null("Activity", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Article", "profileId", "Profile"),
    set_null("Article", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Certification", "profileId", "Profile"),
    set_null("Certification", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Course", "profileId", "Profile"),
    set_null("Course", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Education", "profileId", "Profile"),
    set_null("Education", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Experience", "profileId", "Profile"),
    set_null("Experience", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Group", "profileId", "Profile"),
    set_null("Group", "sharedRawProfileId", "SharedRawProfile"),
    set_null("HonourAward", "profileId", "Profile"),
    set_null("HonourAward", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Language", "profileId", "Profile"),
    set_null("Language", "sharedRawProfileId", "SharedRawProfile"),
    set_null("LinkedInProfileViews", "profileId", "Profile"),
    set_null("LinkedInProfileViews", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Patent", "profileId", "Profile"),
    set_null("Patent", "sharedRawProfileId", "SharedRawProfile"),
    set_null("PeopleAlsoViewed", "profileId", "Profile"),
    set_null("PeopleAlsoViewed", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Project", "profileId", "Profile"),
    set_null("Project", "sharedRawProfileId", "SharedRawProfile"),
    set_null("Publication", "profileId", "Profile"),
    set_null("Publication", "sharedRawProfileId", "SharedRawProfile"),
    set_null("TestScore", "profileId", "Profile"),
    set_null("TestScore", "sharedRawProfileId", "SharedRawProfile"),
    set_null("VolunteerWork", "profileId", "Profile"),
    set_null("VolunteerWork", "sharedRawProfileId", "SharedRawProfile"),
    // scoring
    restrict("CategoryScore", "categoryId", "Category"),
    restrict("CategoryScore", "sharedRawProfileId", "SharedRawProfile"),
    set_null("CategoryScore", "profileId", "Profile"),
    restrict("RecentCategoryScore", "categoryId", "Category"),
    restrict("RecentCategoryScore", "sharedRawProfileId", "SharedRawProfile"),
    set_null("RecentCategoryScore", "profileId", "Profile"),
    // hiring
    set_null("Job", "clientId", "Client"),
    restrict("JobHistory", "jobId", "Job"),
    restrict("CandidateStage", "profileId", "Profile"),
    restrict("CandidateStage", "jobId", "Job"),
    set_null("Interview", "candidateStageId", "CandidateStage"),
    cascade("_JobCandidates", "A", "Job"),
    cascade("_JobCandidates", "B", "Profile"),
    // reference data
    restrict("Product", "companyId", "Company"),
    restrict("CompanyProductCategory", "companyId", "Company"),
    restrict("CompanyProductCategory", "productId", "Product"),
    restrict("CompanyProductCategory", "categoryId", "Category"),
];

/// A unique index over one or more columns of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueKey {
    pub table: &'static str,
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const UNIQUE_KEYS: &[UniqueKey] = &[
    UniqueKey {
        table: "Profile",
        name: "Profile_public_identifier_orgId_key",
        columns: &["public_identifier", "orgId"],
    },
    UniqueKey {
        table: "SensitiveProfileData",
        name: "SensitiveProfileData_profileId_userId_key",
        columns: &["profileId", "userId"],
    },
    UniqueKey {
        table: "ProfileOrg",
        name: "ProfileOrg_public_identifier_orgId_key",
        columns: &["public_identifier", "orgId"],
    },
    UniqueKey {
        table: "SharedRawProfile",
        name: "SharedRawProfile_public_identifier_key",
        columns: &["public_identifier"],
    },
    UniqueKey {
        table: "SharedRawProfile",
        name: "SharedRawProfile_linkedin_profile_url_key",
        columns: &["linkedin_profile_url"],
    },
    UniqueKey {
        table: "Category",
        name: "Category_name_key",
        columns: &["name"],
    },
    UniqueKey {
        table: "CategoryScore",
        name: "CategoryScore_categoryId_sharedRawProfileId_key",
        columns: &["categoryId", "sharedRawProfileId"],
    },
    UniqueKey {
        table: "RecentCategoryScore",
        name: "RecentCategoryScore_sharedRawProfileId_categoryId_key",
        columns: &["sharedRawProfileId", "categoryId"],
    },
    UniqueKey {
        table: "Client",
        name: "Client_name_key",
        columns: &["name"],
    },
    UniqueKey {
        table: "CandidateStage",
        name: "CandidateStage_profileId_jobId_key",
        columns: &["profileId", "jobId"],
    },
    UniqueKey {
        table: "_JobCandidates",
        name: "_JobCandidates_AB_unique",
        columns: &["A", "B"],
    },
    UniqueKey {
        table: "Company",
        name: "Company_name_key",
        columns: &["name"],
    },
    UniqueKey {
        table: "Product",
        name: "Product_name_key",
        columns: &["name"],
    },
    UniqueKey {
        table: "CompanyProductCategory",
        name: "CompanyProductCategory_companyId_productId_categoryId_key",
        columns: &["companyId", "productId", "categoryId"],
    },
];

/// Looks an edge up by its Postgres constraint name, as reported in errors.
pub fn by_constraint(name: &str) -> Option<&'static ForeignKey> {
    FOREIGN_KEYS.iter().find(|fk| fk.constraint_name() == name)
}

/// Looks a unique index up by name. Postgres reports the index name as the
/// constraint of a unique violation.
pub fn unique_by_constraint(name: &str) -> Option<&'static UniqueKey> {
    UNIQUE_KEYS.iter().find(|k| k.name == name)
}

/// Edges pointing at `parent`.
#[cfg(test)]
pub fn children_of(parent: &str) -> impl Iterator<Item = &'static ForeignKey> + '_ {
    FOREIGN_KEYS.iter().filter(move |fk| fk.parent == parent)
}

/// Edges leaving `child`.
#[cfg(test)]
pub fn parents_of(child: &str) -> impl Iterator<Item = &'static ForeignKey> + '_ {
    FOREIGN_KEYS.iter().filter(move |fk| fk.child == child)
}

#[cfg(test)]
pub fn foreign_key(child: &str, column: &str) -> Option<&'static ForeignKey> {
    FOREIGN_KEYS
        .iter()
        .find(|fk| fk.child == child && fk.column == column)
}

/// Child tables whose rows prevent a `parent` row from being deleted, each
/// listed once in declaration order.
#[cfg(test)]
pub fn delete_blockers(parent: &str) -> Vec<&'static str> {
    delete_blockers_in(FOREIGN_KEYS, parent)
}

#[cfg(test)]
fn delete_blockers_in(edges: &[ForeignKey], parent: &str) -> Vec<&'static str> {
    let mut tables: Vec<&'static str> = Vec::new();
    for fk in edges {
        if fk.parent == parent && fk.on_delete == RefAction::Restrict && !tables.contains(&fk.child) {
            tables.push(fk.child);
        }
    }
    tables
}

#[cfg(test)]
pub fn unique_keys_of(table: &str) -> impl Iterator<Item = &'static UniqueKey> + '_ {
    UNIQUE_KEYS.iter().filter(move |k| k.table == table)
}
