// src/services/query_service_tests.rs

#[cfg(test)]
mod tests {
    use crate::domain::{Consumable, Media, MediaEntity, MediaKind, Rateable};
    use crate::error::AppError;
    use crate::repositories::CatalogData;
    use crate::services::query_service::*;
    use crate::services::test_support::*;

    fn titles(items: &[Media]) -> Vec<&str> {
        items.iter().map(|m| m.title()).collect()
    }

    fn library() -> CatalogData {
        let mut dune = book("Dune", "Sci-Fi", 1965);
        dune.set_rating(5).unwrap();
        let mut emma = book("Emma", "Romance", 1915);
        emma.set_consumed(true);

        let mut cidade = movie("Cidade de Deus", "Drama", 2002);
        cidade.set_rating(5).unwrap();
        let tropa = movie("Tropa de Elite", "Action", 2007);
        let mut central = movie("Central do Brasil", "drama", 1998);
        central.set_rating(3).unwrap();

        let mut dark = series_with_seasons("Dark", 2);
        for number in 1..=2 {
            dark.season_mut(number).unwrap().set_rating(4).unwrap();
        }
        dark.recompute_consumed_state();
        let narcos = series_with_seasons("Narcos", 1);

        CatalogData {
            books: vec![dune, emma, book("Iracema", "Romance", 1900)],
            movies: vec![cidade, tropa, central],
            series: vec![dark, narcos],
        }
    }

    // ========================================================================
    // FILTER / LIST
    // ========================================================================

    #[test]
    fn test_filter_on_empty_catalog_is_empty() {
        let catalog = catalog_with(CatalogData::default());
        assert!(filter(&catalog, MediaKind::Movie, Some("Drama"), None).is_empty());
        assert!(list_consumed(&catalog, MediaKind::Series).is_empty());
        assert!(search(&catalog, MediaKind::Book, SearchField::Title, "x").unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_genre_ignores_case_and_keeps_order() {
        let catalog = catalog_with(library());
        let dramas = filter(&catalog, MediaKind::Movie, Some("DRAMA"), None);
        assert_eq!(titles(&dramas), vec!["Cidade de Deus", "Central do Brasil"]);
    }

    #[test]
    fn test_filter_by_year_and_genre() {
        let catalog = catalog_with(library());
        let found = filter(&catalog, MediaKind::Movie, Some("drama"), Some(1998));
        assert_eq!(titles(&found), vec!["Central do Brasil"]);
        assert!(filter(&catalog, MediaKind::Movie, Some("Drama"), Some(1850)).is_empty());
        assert!(filter(&catalog, MediaKind::Book, Some("Poetry"), None).is_empty());
    }

    #[test]
    fn test_blank_genre_is_no_constraint() {
        let catalog = catalog_with(library());
        assert_eq!(filter(&catalog, MediaKind::Book, Some("  "), None).len(), 3);
        assert_eq!(filter(&catalog, MediaKind::Book, None, None).len(), 3);
    }

    #[test]
    fn test_list_with_sort() {
        let catalog = catalog_with(library());
        let options = ListOptions {
            genre: None,
            year: None,
            sort: Some(SortOrder::Descending),
        };
        let movies = list(&catalog, MediaKind::Movie, &options);
        assert_eq!(
            titles(&movies),
            vec!["Cidade de Deus", "Central do Brasil", "Tropa de Elite"]
        );
    }

    // ========================================================================
    // SORT
    // ========================================================================

    #[test]
    fn test_sort_ascending_is_stable() {
        let items = vec![rated_movie("A", 5), rated_movie("B", 3), rated_movie("C", 5)];
        let sorted = sort_by_rating(items, SortOrder::Ascending);
        let order: Vec<&str> = sorted.iter().map(|m| m.title()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let items = vec![
            rated_movie("A", 3),
            rated_movie("B", 5),
            rated_movie("C", 3),
            rated_movie("D", 5),
        ];
        let sorted = sort_by_rating(items, SortOrder::Descending);
        let order: Vec<&str> = sorted.iter().map(|m| m.title()).collect();
        assert_eq!(order, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_sort_uses_derived_series_rating() {
        let catalog = catalog_with(library());
        let sorted = sort_by_rating(catalog.all(MediaKind::Series), SortOrder::Descending);
        assert_eq!(titles(&sorted), vec!["Dark", "Narcos"]);
        assert_eq!(sorted[0].rating(), 4);
    }

    // ========================================================================
    // SEARCH
    // ========================================================================

    #[test]
    fn test_search_title_substring_ignores_case() {
        let catalog = catalog_with(library());
        let found = search(&catalog, MediaKind::Movie, SearchField::Title, "DE ").unwrap();
        assert_eq!(titles(&found), vec!["Cidade de Deus", "Tropa de Elite"]);
    }

    #[test]
    fn test_search_cast_matches_any_member() {
        let catalog = catalog_with(library());
        let found = search(&catalog, MediaKind::Movie, SearchField::Cast, "selton").unwrap();
        assert_eq!(found.len(), 3);
        let found = search(&catalog, MediaKind::Series, SearchField::Cast, "moura").unwrap();
        assert_eq!(titles(&found), vec!["Dark", "Narcos"]);
        assert!(search(&catalog, MediaKind::Movie, SearchField::Cast, "Nobody").unwrap().is_empty());
    }

    #[test]
    fn test_search_author_director_isbn() {
        let catalog = catalog_with(library());

        let found = search(&catalog, MediaKind::Book, SearchField::Author, "of dune").unwrap();
        assert_eq!(titles(&found), vec!["Dune"]);

        let found = search(&catalog, MediaKind::Movie, SearchField::Director, "tropa").unwrap();
        assert_eq!(titles(&found), vec!["Tropa de Elite"]);

        let found = search(&catalog, MediaKind::Book, SearchField::Isbn, "9788535902771").unwrap();
        assert_eq!(found.len(), 3);
        assert!(search(&catalog, MediaKind::Book, SearchField::Isbn, "978853590277").unwrap().is_empty());
    }

    #[test]
    fn test_search_genre_is_equality() {
        let catalog = catalog_with(library());
        let found = search(&catalog, MediaKind::Book, SearchField::Genre, "romance").unwrap();
        assert_eq!(titles(&found), vec!["Emma", "Iracema"]);
        assert!(search(&catalog, MediaKind::Book, SearchField::Genre, "Roman").unwrap().is_empty());
    }

    #[test]
    fn test_search_year() {
        let catalog = catalog_with(library());
        let found = search(&catalog, MediaKind::Book, SearchField::Year, " 1965 ").unwrap();
        assert_eq!(titles(&found), vec!["Dune"]);

        let err = search(&catalog, MediaKind::Book, SearchField::Year, "sixties").unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[test]
    fn test_unsupported_field_fails_fast() {
        let catalog = catalog_with(CatalogData::default());
        let err = search(&catalog, MediaKind::Movie, SearchField::Author, "x").unwrap_err();
        match err {
            AppError::UnsupportedField { kind, field } => {
                assert_eq!(kind, MediaKind::Movie);
                assert_eq!(field, "author");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(search(&catalog, MediaKind::Book, SearchField::Cast, "x").is_err());
        assert!(search(&catalog, MediaKind::Series, SearchField::Director, "x").is_err());
        assert!(search(&catalog, MediaKind::Series, SearchField::Isbn, "x").is_err());
    }

    #[test]
    fn test_search_all_combines_criteria() {
        let catalog = catalog_with(library());
        let criteria = [
            SearchCriteria::new(SearchField::Genre, "drama"),
            SearchCriteria::new(SearchField::Title, "brasil"),
        ];
        let found = search_all(&catalog, MediaKind::Movie, &criteria).unwrap();
        assert_eq!(titles(&found), vec!["Central do Brasil"]);

        assert_eq!(search_all(&catalog, MediaKind::Movie, &[]).unwrap().len(), 3);

        let bad = [
            SearchCriteria::new(SearchField::Title, "dune"),
            SearchCriteria::new(SearchField::Director, "x"),
        ];
        assert!(search_all(&catalog, MediaKind::Book, &bad).is_err());
    }

    #[test]
    fn test_search_field_from_str() {
        assert_eq!("Autor".parse::<SearchField>(), Ok(SearchField::Author));
        assert_eq!("actor".parse::<SearchField>(), Ok(SearchField::Cast));
        assert_eq!("ano".parse::<SearchField>(), Ok(SearchField::Year));
        assert!("rating".parse::<SearchField>().is_err());
    }

    // ========================================================================
    // PARTITIONS
    // ========================================================================

    #[test]
    fn test_consumed_partitions() {
        let catalog = catalog_with(library());
        assert_eq!(titles(&list_consumed(&catalog, MediaKind::Book)), vec!["Dune", "Emma"]);
        assert_eq!(titles(&list_unconsumed(&catalog, MediaKind::Book)), vec!["Iracema"]);
        assert_eq!(titles(&list_consumed(&catalog, MediaKind::Series)), vec!["Dark"]);
        assert_eq!(titles(&list_unconsumed(&catalog, MediaKind::Series)), vec!["Narcos"]);
    }

    #[test]
    fn test_rated_partitions() {
        let catalog = catalog_with(library());
        assert_eq!(
            titles(&list_rated(&catalog, MediaKind::Movie)),
            vec!["Cidade de Deus", "Central do Brasil"]
        );
        assert_eq!(titles(&list_unrated(&catalog, MediaKind::Movie)), vec!["Tropa de Elite"]);
        assert_eq!(titles(&list_unrated(&catalog, MediaKind::Book)), vec!["Emma", "Iracema"]);
    }
}
