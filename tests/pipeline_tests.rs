use chrono::{DateTime, TimeZone, Utc};

use docindex::pipeline::{
    group_by_month, month_label, normalize, order_entries, project, reorder, SearchIndex, SearchOutcome,
};
use docindex::{DocIndexError, MenuEntry, Record, ViewState, MIN_ORDER};

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single().unwrap()
}

fn records(titles: &[(&str, &str)]) -> Vec<Record> {
    titles
        .iter()
        .map(|(id, title)| Record::new(*id, *title, at(2024, 1, 1)))
        .collect()
}

fn ranks(pairs: &[(&str, i64)]) -> ViewState {
    let mut state = ViewState::default();
    for (id, order) in pairs {
        state.instance_order.insert((*id).to_string(), *order);
    }
    state
}

fn ids(entries: &[MenuEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn normalization_strips_combining_marks() {
    assert_eq!(normalize("Crème Brûlée"), "Creme Brulee");
    assert_eq!(normalize("naïve café"), "naive cafe");
    assert_eq!(normalize(""), "");
}

#[test]
fn normalization_is_idempotent() {
    for text in ["Ångström", "Dvořák", "São Paulo", "plain ascii", "ﬁ ligature"] {
        let once = normalize(text);
        assert_eq!(normalize(&once), once, "normalizing {text:?} twice changed it");
    }
}

#[test]
fn unranked_entries_sit_at_min_order_and_keep_data_order() {
    let recs = records(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
    let state = ranks(&[("c", -1), ("a", 2)]);

    let entries = order_entries(&recs, &state, true);

    assert_eq!(ids(&entries), ["c", "b", "d", "a"]);
    assert_eq!(entries[1].order, MIN_ORDER);
    assert_eq!(entries[2].order, MIN_ORDER);
}

#[test]
fn data_order_is_kept_without_manual_ordering() {
    let recs = records(&[("a", "A"), ("b", "B"), ("c", "C")]);
    let state = ranks(&[("a", 5), ("b", 1), ("c", 0)]);

    assert_eq!(ids(&order_entries(&recs, &state, false)), ["a", "b", "c"]);
    assert_eq!(ids(&order_entries(&recs, &state, true)), ["c", "b", "a"]);
}

#[test]
fn stale_ranks_are_ignored() {
    let recs = records(&[("a", "A"), ("b", "B")]);
    let state = ranks(&[("gone", -10), ("b", -1)]);

    assert_eq!(ids(&order_entries(&recs, &state, true)), ["b", "a"]);
}

#[test]
fn reorder_moves_one_entry_and_ranks_every_entry() {
    let recs = records(&[("A", "Alpha"), ("B", "Beta"), ("C", "Gamma")]);
    let mut entries = order_entries(&recs, &ViewState::default(), true);

    let state = reorder(&mut entries, 0, 2).unwrap();

    assert_eq!(ids(&entries), ["B", "C", "A"]);
    assert_eq!(state, ranks(&[("B", 0), ("C", 1), ("A", 2)]));
    assert_eq!(entries.iter().map(|e| e.order).collect::<Vec<_>>(), [0, 1, 2]);
}

#[test]
fn reorder_result_survives_a_refresh() {
    let recs = records(&[("A", "Alpha"), ("B", "Beta"), ("C", "Gamma")]);
    let mut entries = order_entries(&recs, &ViewState::default(), true);
    let state = reorder(&mut entries, 2, 0).unwrap();

    let refreshed = order_entries(&recs, &state, true);

    assert_eq!(ids(&refreshed), ["C", "A", "B"]);
}

#[test]
fn out_of_range_reorder_is_rejected_without_changes() {
    let recs = records(&[("A", "Alpha"), ("B", "Beta")]);
    let mut entries = project(&recs, &ViewState::default());
    let before = entries.clone();

    let err = reorder(&mut entries, 0, 2).unwrap_err();

    assert!(matches!(err, DocIndexError::Reorder { from: 0, to: 2, len: 2 }));
    assert_eq!(entries, before);
}

#[test]
fn month_labels_distinguish_years() {
    assert_eq!(month_label(&at(2023, 3, 15)), "Mar-2023");
    assert_eq!(month_label(&at(2024, 3, 15)), "Mar-2024");
    assert_eq!(month_label(&at(2024, 12, 31)), "Dec-2024");
}

#[test]
fn groups_partition_entries_in_first_seen_order() {
    let recs = vec![
        Record::new("1", "One", at(2024, 3, 2)),
        Record::new("2", "Two", at(2023, 3, 9)),
        Record::new("3", "Three", at(2024, 3, 20)),
        Record::new("4", "Four", at(2023, 11, 1)),
        Record::new("5", "Five", at(2023, 3, 30)),
    ];
    let entries = project(&recs, &ViewState::default());

    let groups = group_by_month(&entries);

    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, ["Mar-2024", "Mar-2023", "Nov-2023"]);

    let members: Vec<Vec<&str>> = groups
        .iter()
        .map(|g| g.entries.iter().map(|e| e.id.as_str()).collect())
        .collect();
    assert_eq!(members, vec![vec!["1", "3"], vec!["2", "5"], vec!["4"]]);

    let total: usize = groups.iter().map(|g| g.entries.len()).sum();
    assert_eq!(total, entries.len());
    assert!(groups.iter().all(|g| !g.entries.is_empty()));
}

#[test]
fn grouping_nothing_yields_no_groups() {
    assert!(group_by_month(&[]).is_empty());
}

fn search(titles: &[(&str, &str)], query: &str) -> SearchOutcome {
    let entries = project(&records(titles), &ViewState::default());
    SearchIndex::build(&entries).query(query)
}

fn hits(outcome: SearchOutcome) -> Vec<(String, Vec<(usize, usize)>)> {
    match outcome {
        SearchOutcome::Unfiltered => panic!("expected a filtered outcome"),
        SearchOutcome::Filtered(hits) => hits.into_iter().map(|h| (h.id, h.ranges)).collect(),
    }
}

#[test]
fn blank_query_does_not_filter() {
    let titles = [("1", "Apple Pie"), ("2", "Banana Bread")];
    assert_eq!(search(&titles, ""), SearchOutcome::Unfiltered);
    assert_eq!(search(&titles, " \t "), SearchOutcome::Unfiltered);
}

#[test]
fn prefix_query_matches_and_highlights_word_starts() {
    let titles = [("1", "Apple Pie"), ("2", "Banana Bread"), ("3", "Apricot")];

    let mut found = hits(search(&titles, "ap"));
    found.sort();

    assert_eq!(
        found,
        vec![("1".to_string(), vec![(0, 1)]), ("3".to_string(), vec![(0, 1)])]
    );
}

#[test]
fn every_token_must_match() {
    let titles = [("1", "Apple Pie"), ("2", "Apple Crumble"), ("3", "Pie Crust")];

    let found = hits(search(&titles, "apple pie"));

    assert_eq!(found, vec![("1".to_string(), vec![(0, 4), (6, 8)])]);
}

#[test]
fn search_ignores_case_and_diacritics() {
    let titles = [("1", "Crème Brûlée"), ("2", "Cream Soda")];

    let found = hits(search(&titles, "BRU"));
    assert_eq!(found, vec![("1".to_string(), vec![(6, 8)])]);

    let found = hits(search(&titles, "crèm"));
    assert_eq!(found, vec![("1".to_string(), vec![(0, 3)])]);
}

#[test]
fn misspelled_tokens_do_not_match() {
    assert!(hits(search(&[("1", "Banana Bread")], "bnana")).is_empty());
}

#[test]
fn single_character_queries_produce_no_results() {
    assert!(hits(search(&[("1", "Apple Pie")], "a")).is_empty());
}

#[test]
fn hits_come_back_in_relevance_order() {
    let titles = [("later", "Notes on apple pie"), ("start", "Apple")];

    let order: Vec<String> = hits(search(&titles, "apple")).into_iter().map(|(id, _)| id).collect();

    assert_eq!(order, ["start", "later"]);
}

#[test]
fn tied_hits_keep_list_order() {
    let titles = [("z", "Apple Tart"), ("a", "Apple Pie"), ("m", "Apple Jam")];

    let order: Vec<String> = hits(search(&titles, "apple")).into_iter().map(|(id, _)| id).collect();

    assert_eq!(order, ["z", "a", "m"]);
}

#[test]
fn highlights_follow_display_characters_of_expanding_scripts() {
    let titles = [("1", "한글 Notes"), ("2", "\u{fb2f}\u{0958} Draft")];

    assert_eq!(hits(search(&titles, "notes")), vec![("1".to_string(), vec![(3, 7)])]);
    assert_eq!(hits(search(&titles, "draft")), vec![("2".to_string(), vec![(3, 7)])]);
}
