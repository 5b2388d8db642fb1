use super::prelude::*;
use crate::util::slug::kebab;

/// Derives a unique, URL-safe slug from a case title.
///
/// A collision with another case's slug is disambiguated by appending
/// the kebab-cased city. Collisions beyond that are assumed not to
/// occur: two identically titled cases in the same city are treated as
/// the same incident by editorial policy.
pub fn derive_case_slug<R>(
    repo: &R,
    title: &str,
    city: Option<&str>,
    excluded_case_id: Option<&Id>,
) -> Result<String>
where
    R: CaseRepo,
{
    let base = kebab(title);
    if !repo.is_slug_taken(&base, excluded_case_id)? {
        return Ok(base);
    }
    let city = city.map(kebab).filter(|c| !c.is_empty());
    Ok(match city {
        Some(city) => format!("{base}-{city}"),
        None => base,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use ebw_entities::builders::Builder;

    #[test]
    fn slug_without_collision_is_kebab_cased_title() {
        let db = MockDb::default();
        let slug = derive_case_slug(&db, "The Title", Some("Albany"), None).unwrap();
        assert_eq!(slug, "the-title");
    }

    #[test]
    fn colliding_slug_is_disambiguated_by_city() {
        let db = MockDb::default();
        db.cases
            .borrow_mut()
            .push(Case::build().title("The Title").slug("the-title").finish());
        let slug = derive_case_slug(&db, "The Title", Some("Albany"), None).unwrap();
        assert_eq!(slug, "the-title-albany");
    }

    #[test]
    fn own_slug_is_not_a_collision() {
        let db = MockDb::default();
        let case = Case::build()
            .id("case-1")
            .title("The Title")
            .slug("the-title")
            .finish();
        let id = case.id.clone();
        db.cases.borrow_mut().push(case);
        let slug = derive_case_slug(&db, "The Title", Some("Albany"), Some(&id)).unwrap();
        assert_eq!(slug, "the-title");
    }
}
