//! Tests for the list pipeline: filter, search, sort and pagination.

#[cfg(test)]
mod tests {
    use crate::{
        Catalogue, ListPipeline, ListQuery, PAGE_SIZE, SortOrder, StatusFilter, paginate, select,
        total_pages,
    };

    fn record(id: i64, name: &str, active: bool) -> Catalogue {
        Catalogue {
            catalogue_id: id,
            catalogue_name: name.to_owned(),
            catalogue_version: "v1".to_owned(),
            is_cat_active: active,
            catalogue_start: None,
            catalogue_end: None,
        }
    }

    fn ids(records: &[Catalogue]) -> Vec<i64> {
        records.iter().map(|r| r.catalogue_id).collect()
    }

    /// 23 records with mixed names, ids out of order, every third inactive.
    fn sample() -> Vec<Catalogue> {
        (1..=23)
            .rev()
            .map(|i| {
                let name = if i % 2 == 0 { format!("Summer {i}") } else { format!("winter {i}") };
                record(i * 7 % 100, &name, i % 3 != 0)
            })
            .collect()
    }

    fn all_queries() -> Vec<ListQuery> {
        let mut queries = Vec::new();
        for status in StatusFilter::ALL {
            for sort in SortOrder::ALL {
                for search in ["", "summer", "WIN", "1", "7", "nothing-matches", "  Summer  "] {
                    queries.push(ListQuery { search: search.to_owned(), status, sort, page: 1 });
                }
            }
        }
        queries
    }

    #[test]
    fn test_scenario_active_ascending() {
        let mut pipeline = ListPipeline::new();
        pipeline.replace(vec![record(3, "A", true), record(1, "B", false), record(2, "C", true)]);
        pipeline.set_status(StatusFilter::Active);
        pipeline.set_sort(SortOrder::Asc);

        let view = pipeline.page();
        assert_eq!(ids(&view.records), vec![2, 3]);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert!(view.prev_disabled());
        assert!(view.next_disabled());
    }

    #[test]
    fn test_pages_concatenate_to_selection() {
        let records = sample();
        for query in all_queries() {
            let mut pipeline = ListPipeline::new();
            pipeline.replace(records.clone());
            pipeline.apply_query(query.clone());

            let expected = select(&records, &query);
            let first = pipeline.page();
            assert_eq!(first.total_pages, total_pages(expected.len()));

            let mut seen = Vec::new();
            for page in 1..=first.total_pages {
                pipeline.go_to_page(page);
                let view = pipeline.page();
                assert!(view.records.len() <= PAGE_SIZE, "query {query:?} page {page}");
                assert_eq!(view.page, page);
                seen.extend(view.records);
            }
            assert_eq!(ids(&seen), ids(&expected), "query {query:?}");
        }
    }

    #[test]
    fn test_selection_is_deduplicated_and_complete() {
        let records = sample();
        for query in all_queries() {
            let selected = select(&records, &query);
            let mut unique = ids(&selected);
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), selected.len());
            for r in &records {
                let kept = selected.iter().any(|s| s.catalogue_id == r.catalogue_id);
                let status_ok = match query.status {
                    StatusFilter::All => true,
                    StatusFilter::Active => r.is_cat_active,
                    StatusFilter::Inactive => !r.is_cat_active,
                };
                let needle = query.search.trim();
                let search_ok = needle.is_empty()
                    || r.catalogue_name.to_lowercase().contains(&needle.to_lowercase())
                    || r.catalogue_id.to_string().contains(needle);
                assert_eq!(kept, status_ok && search_ok, "record {r:?} query {query:?}");
            }
        }
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let records = sample();
        for status in StatusFilter::ALL {
            let asc = ListQuery { status, sort: SortOrder::Asc, ..ListQuery::default() };
            let desc = ListQuery { sort: SortOrder::Desc, ..asc.clone() };
            let mut reversed = ids(&select(&records, &asc));
            reversed.reverse();
            assert_eq!(ids(&select(&records, &desc)), reversed);
        }
    }

    #[test]
    fn test_sort_does_not_touch_cache() {
        let mut pipeline = ListPipeline::new();
        pipeline.replace(vec![record(3, "A", true), record(1, "B", true), record(2, "C", true)]);
        pipeline.set_sort(SortOrder::Desc);
        let _ = pipeline.page();
        assert_eq!(ids(pipeline.records()), vec![3, 1, 2]);
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(11), 3);
    }

    #[test]
    fn test_empty_result_is_single_disabled_page() {
        let mut pipeline = ListPipeline::new();
        pipeline.replace(sample());
        pipeline.set_search("no such catalogue");
        let view = pipeline.page();
        assert!(view.is_empty());
        assert!(view.records.is_empty());
        assert_eq!(view.total_pages, 1);
        assert!(view.prev_disabled());
        assert!(view.next_disabled());
    }

    #[test]
    fn test_prev_next_disabled_rules() {
        let mut pipeline = ListPipeline::new();
        pipeline.replace(sample());
        let total = pipeline.page().total_pages;
        assert_eq!(total, 5);

        for page in 1..=total {
            pipeline.go_to_page(page);
            let view = pipeline.page();
            assert_eq!(view.prev_disabled(), page == 1);
            assert_eq!(view.next_disabled(), page == total);
        }
    }

    #[test]
    fn test_navigation_clamps_at_bounds() {
        let mut pipeline = ListPipeline::new();
        pipeline.replace(sample());
        pipeline.prev_page();
        assert_eq!(pipeline.query().page, 1);
        for _ in 0..20 {
            pipeline.next_page();
        }
        assert_eq!(pipeline.query().page, 5);
        pipeline.go_to_page(0);
        assert_eq!(pipeline.query().page, 1);
    }

    #[test]
    fn test_control_changes_reset_page() {
        let mut pipeline = ListPipeline::new();
        pipeline.replace(sample());

        pipeline.go_to_page(3);
        pipeline.set_search("summer");
        assert_eq!(pipeline.page().page, 1);

        pipeline.set_search("");
        pipeline.go_to_page(3);
        pipeline.set_status(StatusFilter::Active);
        assert_eq!(pipeline.page().page, 1);

        pipeline.set_status(StatusFilter::All);
        pipeline.go_to_page(3);
        pipeline.set_sort(SortOrder::Desc);
        assert_eq!(pipeline.page().page, 1);
    }

    #[test]
    fn test_apply_query_resets_page_only_on_changed_selection() {
        let mut pipeline = ListPipeline::new();
        pipeline.replace(sample());

        pipeline.apply_query(ListQuery { page: 3, ..ListQuery::default() });
        assert_eq!(pipeline.query().page, 3);

        pipeline.apply_query(ListQuery {
            search: "winter".to_owned(),
            page: 2,
            ..ListQuery::default()
        });
        assert_eq!(pipeline.query().page, 1);

        pipeline.apply_query(ListQuery {
            search: "winter".to_owned(),
            page: 2,
            ..ListQuery::default()
        });
        assert_eq!(pipeline.query().page, 2);
    }

    #[test]
    fn test_refetch_clamps_page_to_smaller_set() {
        let mut pipeline = ListPipeline::new();
        pipeline.replace(sample());
        pipeline.go_to_page(5);
        pipeline.replace(vec![record(1, "only", true)]);
        let view = pipeline.page();
        assert_eq!(view.page, 1);
        assert_eq!(ids(&view.records), vec![1]);
    }

    #[test]
    fn test_search_matches_partial_id() {
        let records = vec![record(105, "Alpha", true), record(15, "Beta", true), record(2, "Gamma", true)];
        let query = ListQuery { search: "5".to_owned(), ..ListQuery::default() };
        assert_eq!(ids(&select(&records, &query)), vec![15, 105]);
    }

    #[test]
    fn test_paginate_clamps_out_of_range_page() {
        let records = sample();
        let (page, slice) = paginate(&records, 99);
        assert_eq!(page, 5);
        assert_eq!(slice.len(), 3);
    }
}
