use chrono::{TimeZone, Utc};

use docindex::app::{handle_event, Action, AppState, Event, Selection, SettingsDialog};
use docindex::host::{Category, HostProps};
use docindex::ui::viewmodel::MenuRow;
use docindex::{DisplayMode, DocIndexError, Record, Theme, ViewSettings, ViewState};

const PLAIN: ViewSettings = ViewSettings {
    allow_manual_order: false,
    allow_grouping: false,
};
const SORTABLE: ViewSettings = ViewSettings {
    allow_manual_order: true,
    allow_grouping: false,
};
const GROUPED: ViewSettings = ViewSettings {
    allow_manual_order: false,
    allow_grouping: true,
};

fn record(id: &str, title: &str, month: u32) -> Record {
    let created_at = Utc.with_ymd_and_hms(2024, month, 10, 9, 0, 0).single().unwrap();
    Record::new(id, title, created_at)
}

fn sample_records() -> Vec<Record> {
    vec![
        record("a", "Apple Pie", 3),
        record("b", "Banana Bread", 3),
        record("c", "Apricot Jam", 4),
    ]
}

fn props(marker: &str, settings: Option<ViewSettings>) -> HostProps {
    HostProps {
        records: sample_records(),
        view_settings: settings,
        fetch_marker: marker.to_string(),
        ..Default::default()
    }
}

fn loaded(settings: ViewSettings) -> AppState {
    let mut state = AppState::new(Theme::default());
    handle_event(&mut state, &Event::HostUpdate(props("1", Some(settings)))).unwrap();
    state
}

fn visible_ids(state: &AppState) -> Vec<&str> {
    state.visible_entries().iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn first_update_selects_first_entry_and_requests_detail() {
    let mut state = AppState::new(Theme::default());

    let (render, actions) = handle_event(&mut state, &Event::HostUpdate(props("1", Some(PLAIN)))).unwrap();

    assert!(render);
    assert_eq!(actions, vec![Action::RequestDetailView { id: "a".to_string() }]);
    assert_eq!(state.selection, Selection::Selected("a".to_string()));
}

#[test]
fn empty_collection_keeps_no_selection() {
    let mut state = AppState::new(Theme::default());
    let empty = HostProps {
        view_settings: Some(PLAIN),
        fetch_marker: "1".to_string(),
        ..Default::default()
    };

    let (_, actions) = handle_event(&mut state, &Event::HostUpdate(empty)).unwrap();

    assert!(actions.is_empty());
    assert_eq!(state.selection, Selection::NoSelection);
}

#[test]
fn default_selection_follows_manual_order() {
    let mut state = AppState::new(Theme::default());
    let mut first = props("1", Some(SORTABLE));
    let mut order = ViewState::default();
    order.instance_order.insert("c".to_string(), -1);
    first.view_state = Some(order);

    let (_, actions) = handle_event(&mut state, &Event::HostUpdate(first)).unwrap();

    assert_eq!(actions, vec![Action::RequestDetailView { id: "c".to_string() }]);
}

#[test]
fn select_requests_detail_for_listed_entries_only() {
    let mut state = loaded(PLAIN);

    let (render, actions) = handle_event(&mut state, &Event::Select("b".to_string())).unwrap();
    assert!(render);
    assert_eq!(actions, vec![Action::RequestDetailView { id: "b".to_string() }]);

    let (render, actions) = handle_event(&mut state, &Event::Select("missing".to_string())).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.selection.id(), Some("b"));
}

#[test]
fn selection_survives_a_refresh() {
    let mut state = loaded(PLAIN);
    handle_event(&mut state, &Event::Select("c".to_string())).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::HostUpdate(props("2", Some(PLAIN)))).unwrap();

    assert!(actions.is_empty());
    assert_eq!(state.selection.id(), Some("c"));
}

#[test]
fn unchanged_fetch_marker_does_not_rebuild() {
    let mut state = loaded(PLAIN);
    handle_event(&mut state, &Event::Search("ap".to_string())).unwrap();

    let mut same = props("1", Some(PLAIN));
    same.records.push(record("d", "Date Loaf", 5));
    handle_event(&mut state, &Event::HostUpdate(same)).unwrap();

    assert_eq!(state.entries.len(), 3);
    assert_eq!(state.search_query, "ap");
    assert!(state.filtered.is_some());
}

#[test]
fn refresh_rebuilds_index_and_clears_search() {
    let mut state = loaded(PLAIN);
    handle_event(&mut state, &Event::Search("ap".to_string())).unwrap();
    assert_eq!(state.filtered.as_ref().map(Vec::len), Some(2));

    let mut next = props("2", Some(PLAIN));
    next.records.push(record("d", "Apple Crumble", 5));
    handle_event(&mut state, &Event::HostUpdate(next)).unwrap();

    assert!(state.search_query.is_empty());
    assert!(state.filtered.is_none());
    assert!(state.highlights.is_empty());
    assert_eq!(state.index.len(), 4);

    handle_event(&mut state, &Event::Search("apple".to_string())).unwrap();
    let mut found = visible_ids(&state);
    found.sort_unstable();
    assert_eq!(found, ["a", "d"]);
}

#[test]
fn search_filters_and_highlights_display_titles() {
    let mut state = loaded(PLAIN);

    handle_event(&mut state, &Event::Search("ap".to_string())).unwrap();

    let mut found = visible_ids(&state);
    found.sort_unstable();
    assert_eq!(found, ["a", "c"]);

    let vm = state.compute_viewmodel();
    for item in vm.item_rows() {
        assert_eq!(item.highlight.len(), item.title.chars().count());
        assert_eq!(&item.highlight[..3], [true, true, false]);
    }
}

#[test]
fn filtered_list_is_in_relevance_order() {
    let mut state = AppState::new(Theme::default());
    let mut scoped = props("1", Some(PLAIN));
    scoped.records = vec![record("x", "Notes on apple pie", 3), record("y", "Apple", 3)];
    handle_event(&mut state, &Event::HostUpdate(scoped)).unwrap();

    handle_event(&mut state, &Event::Search("apple".to_string())).unwrap();

    assert_eq!(visible_ids(&state), ["y", "x"]);
}

#[test]
fn highlight_mask_lines_up_with_hangul_titles() {
    let mut state = AppState::new(Theme::default());
    let mut scoped = props("1", Some(PLAIN));
    scoped.records = vec![record("k", "한글 Notes", 3)];
    handle_event(&mut state, &Event::HostUpdate(scoped)).unwrap();

    handle_event(&mut state, &Event::Search("notes".to_string())).unwrap();

    let vm = state.compute_viewmodel();
    let item = vm.item_rows().next().unwrap();
    assert_eq!(item.highlight, [false, false, false, true, true, true, true, true]);
}

#[test]
fn clearing_the_search_restores_every_entry() {
    let mut state = loaded(PLAIN);
    handle_event(&mut state, &Event::Search("banana".to_string())).unwrap();
    assert_eq!(visible_ids(&state), ["b"]);

    handle_event(&mut state, &Event::Search("  ".to_string())).unwrap();

    assert_eq!(visible_ids(&state), ["a", "b", "c"]);
    assert!(state.highlights.is_empty());
    assert!(state.compute_viewmodel().item_rows().all(|i| i.highlight.iter().all(|h| !h)));
}

#[test]
fn filtering_out_the_selection_keeps_it() {
    let mut state = loaded(PLAIN);

    handle_event(&mut state, &Event::Search("banana".to_string())).unwrap();

    assert_eq!(state.selection.id(), Some("a"));
    assert!(state.compute_viewmodel().selected_row().is_none());
}

#[test]
fn reorder_persists_full_ranking_in_sortable_mode() {
    let mut state = loaded(SORTABLE);

    let (render, actions) = handle_event(&mut state, &Event::Reorder { from: 0, to: 2 }).unwrap();

    let mut expected = ViewState::default();
    for (position, id) in (0_i64..).zip(["b", "c", "a"]) {
        expected.instance_order.insert(id.to_string(), position);
    }
    assert!(render);
    assert_eq!(actions, vec![Action::PersistViewState(expected)]);
    assert_eq!(visible_ids(&state), ["b", "c", "a"]);
    assert_eq!(state.selection.id(), Some("a"));
}

#[test]
fn reorder_is_ignored_outside_sortable_mode() {
    for settings in [PLAIN, GROUPED] {
        let mut state = loaded(settings);

        let (render, actions) = handle_event(&mut state, &Event::Reorder { from: 0, to: 2 }).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(visible_ids(&state), ["a", "b", "c"]);
    }
}

#[test]
fn reorder_is_ignored_while_filtered() {
    let mut state = loaded(SORTABLE);
    handle_event(&mut state, &Event::Search("ap".to_string())).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::Reorder { from: 0, to: 1 }).unwrap();

    assert!(actions.is_empty());
    let entries: Vec<&str> = state.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(entries, ["a", "b", "c"]);
}

#[test]
fn out_of_range_reorder_fails_without_changes() {
    let mut state = loaded(SORTABLE);

    let err = handle_event(&mut state, &Event::Reorder { from: 1, to: 7 }).unwrap_err();

    assert!(matches!(err, DocIndexError::Reorder { from: 1, to: 7, len: 3 }));
    assert_eq!(visible_ids(&state), ["a", "b", "c"]);
}

#[test]
fn grouped_mode_interleaves_month_headers() {
    let state = loaded(GROUPED);

    let vm = state.compute_viewmodel();

    assert_eq!(vm.mode, Some(DisplayMode::Grouped));
    let layout: Vec<String> = vm
        .rows
        .iter()
        .map(|row| match row {
            MenuRow::Header(label) => format!("# {label}"),
            MenuRow::Item(item) => item.id.clone(),
        })
        .collect();
    assert_eq!(layout, ["# Mar-2024", "a", "b", "# Apr-2024", "c"]);
    assert!(vm.item_rows().all(|item| !item.draggable));
}

#[test]
fn sortable_mode_marks_rows_draggable() {
    let vm = loaded(SORTABLE).compute_viewmodel();

    assert_eq!(vm.mode, Some(DisplayMode::Sortable));
    assert!(vm.item_rows().all(|item| item.draggable));
    assert!(vm.rows.iter().all(|row| matches!(row, MenuRow::Item(_))));
}

#[test]
fn nothing_is_listed_until_settings_exist() {
    let mut state = AppState::new(Theme::default());

    let (_, actions) = handle_event(&mut state, &Event::HostUpdate(props("1", None))).unwrap();

    assert!(actions.is_empty());
    assert!(state.entries.is_empty());
    let vm = state.compute_viewmodel();
    assert!(vm.rows.is_empty());
    let dialog = vm.settings_dialog.unwrap();
    assert!(!dialog.can_cancel);
}

#[test]
fn settings_arriving_later_still_build_the_list() {
    let mut state = AppState::new(Theme::default());
    handle_event(&mut state, &Event::HostUpdate(props("1", None))).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::HostUpdate(props("2", Some(PLAIN)))).unwrap();

    assert_eq!(state.entries.len(), 3);
    assert_eq!(actions, vec![Action::RequestDetailView { id: "a".to_string() }]);
}

#[test]
fn cancel_is_ignored_before_settings_exist() {
    let mut state = AppState::new(Theme::default());
    handle_event(&mut state, &Event::HostUpdate(props("1", None))).unwrap();

    let (render, _) = handle_event(&mut state, &Event::CancelSettings).unwrap();

    assert!(!render);
    assert!(state.is_settings_dialog_visible());
}

#[test]
fn settings_dialog_round_trip() {
    let mut state = loaded(PLAIN);
    assert!(!state.is_settings_dialog_visible());

    handle_event(&mut state, &Event::ShowSettings).unwrap();
    assert_eq!(state.settings_dialog, SettingsDialog::Open);

    let both = ViewSettings {
        allow_manual_order: true,
        allow_grouping: true,
    };
    let (_, actions) = handle_event(&mut state, &Event::SaveSettings(both)).unwrap();
    assert_eq!(actions, vec![Action::PersistViewSettings(SORTABLE)]);
    assert_eq!(state.settings_dialog, SettingsDialog::Saving);
    assert!(state.compute_viewmodel().settings_dialog.unwrap().saving);

    handle_event(&mut state, &Event::SettingsPersisted).unwrap();
    assert!(!state.is_settings_dialog_visible());
}

#[test]
fn cancel_hides_the_dialog_once_settings_exist() {
    let mut state = loaded(PLAIN);
    handle_event(&mut state, &Event::ShowSettings).unwrap();

    let (render, actions) = handle_event(&mut state, &Event::CancelSettings).unwrap();

    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.settings_dialog, SettingsDialog::Hidden);
}

#[test]
fn dialog_title_names_the_category() {
    let mut state = AppState::new(Theme::default());
    let mut scoped = props("1", None);
    scoped.category_id = Some("recipes".to_string());
    scoped.category_context.insert(
        "recipes".to_string(),
        Category {
            id: "recipes".to_string(),
            name: "Recipes".to_string(),
        },
    );

    handle_event(&mut state, &Event::HostUpdate(scoped)).unwrap();

    let dialog = state.compute_viewmodel().settings_dialog.unwrap();
    assert_eq!(dialog.title, "View settings: Recipes");
}
