use route_waypoint_editor::app::FormField;
use route_waypoint_editor::{
    AppCommand, AppController, AppIntent, EditingSession, EditorMode, InMemoryRouteRepository,
    LatLng, RouteVersion,
};

const ROUTE_A: &str = include_str!("fixtures/yushan_route_a.geojson");
const ROUTE_B: &str = include_str!("fixtures/yushan_route_b.geojson");

fn controller() -> AppController {
    AppController::new(
        InMemoryRouteRepository::new()
            .with_route("yushan", RouteVersion::A, ROUTE_A)
            .with_route("yushan", RouteVersion::B, ROUTE_B)
            .with_route("only_a", RouteVersion::A, ROUTE_A),
    )
}

fn loaded() -> (AppController, EditingSession) {
    let mut controller = controller();
    let mut session = EditingSession::new();
    controller
        .handle_intent(
            &mut session,
            AppIntent::RouteSelected {
                name: "yushan".into(),
            },
        )
        .expect("Route sollte laden");
    (controller, session)
}

fn names(session: &EditingSession) -> Vec<Option<String>> {
    session
        .engine
        .points()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

fn orders(session: &EditingSession) -> Vec<String> {
    session
        .engine
        .points()
        .iter()
        .map(|p| p.order.clone())
        .collect()
}

#[test]
fn test_route_list_and_load_with_background() {
    let mut controller = controller();
    let mut session = EditingSession::new();

    controller
        .handle_intent(&mut session, AppIntent::RouteListRequested)
        .expect("Liste");
    assert_eq!(
        session.available_routes,
        vec!["only_a".to_string(), "yushan".to_string()]
    );

    controller
        .handle_intent(
            &mut session,
            AppIntent::RouteSelected {
                name: "yushan".into(),
            },
        )
        .expect("Laden");

    assert_eq!(session.route_name.as_deref(), Some("yushan"));
    assert_eq!(orders(&session), vec!["1", "2", "3"]);
    assert_eq!(
        session.engine.store().background().map(|b| b.len()),
        Some(2)
    );
    assert!(session
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("Hintergrund")));
    assert_eq!(
        session.command_log.last_command(),
        Some(&AppCommand::LoadRoute {
            name: "yushan".into(),
            version: RouteVersion::A
        })
    );
}

#[test]
fn test_missing_background_is_not_an_error() {
    let mut controller = controller();
    let mut session = EditingSession::new();
    controller
        .handle_intent(
            &mut session,
            AppIntent::RouteSelected {
                name: "only_a".into(),
            },
        )
        .expect("Laden ohne Hintergrund");

    assert_eq!(session.engine.points().len(), 3);
    assert!(session.engine.store().background().is_none());
    let scene = controller.build_render_scene(&session);
    assert!(scene.background.is_none());
    assert_eq!(scene.primary.markers.len(), 3);
}

#[test]
fn test_failed_load_keeps_previous_route() {
    let (mut controller, mut session) = loaded();
    session.engine.toggle_selection(1);

    let result = controller.handle_intent(
        &mut session,
        AppIntent::RouteSelected {
            name: "missing".into(),
        },
    );

    assert!(result.is_err());
    assert_eq!(session.route_name.as_deref(), Some("yushan"));
    assert_eq!(session.engine.points().len(), 3);
    assert!(session.engine.selection().contains(1));
}

#[test]
fn test_version_switch_swaps_active_and_background() {
    let (mut controller, mut session) = loaded();

    controller
        .handle_intent(
            &mut session,
            AppIntent::VersionSelected {
                version: RouteVersion::B,
            },
        )
        .expect("Variante B");

    assert_eq!(session.version, RouteVersion::B);
    assert_eq!(session.engine.points().len(), 2);
    assert_eq!(
        session.engine.store().background().map(|b| b.len()),
        Some(3)
    );

    let logged = session.command_log.len();
    controller
        .handle_intent(
            &mut session,
            AppIntent::VersionSelected {
                version: RouteVersion::B,
            },
        )
        .expect("gleiche Variante");
    assert_eq!(session.command_log.len(), logged);
}

#[test]
fn test_map_click_opens_form_and_submit_inserts_after_nearest() {
    let (mut controller, mut session) = loaded();

    controller
        .handle_intent(
            &mut session,
            AppIntent::MapClicked {
                position: LatLng::new(23.11, 121.001),
            },
        )
        .expect("Klick");
    let EditorMode::Adding(form) = &session.mode else {
        panic!("Formular sollte offen sein");
    };
    assert_eq!(form.latitude, "23.110000");
    assert_eq!(form.longitude, "121.001000");

    // zweiter Klick aktualisiert nur die Koordinaten
    controller
        .handle_intent(
            &mut session,
            AppIntent::MapClicked {
                position: LatLng::new(23.12, 121.001),
            },
        )
        .expect("Klick");
    assert_eq!(
        session.mode.form().map(|f| f.latitude.as_str()),
        Some("23.120000")
    );

    controller
        .handle_intent(
            &mut session,
            AppIntent::AddFormFieldChanged {
                field: FormField::Name,
                value: "排雲山莊".into(),
            },
        )
        .expect("Name");
    controller
        .handle_intent(&mut session, AppIntent::AddPointSubmitted)
        .expect("Submit");

    assert!(!session.mode.is_adding());
    assert_eq!(orders(&session), vec!["1", "2", "3", "4"]);
    assert_eq!(names(&session)[2].as_deref(), Some("排雲山莊"));
    assert_eq!(session.status_line(), "1 added, 0 deleted, 0 modified");
}

#[test]
fn test_invalid_form_stays_open_and_route_unchanged() {
    let (mut controller, mut session) = loaded();

    controller
        .handle_intent(&mut session, AppIntent::AddPointRequested)
        .expect("Formular");
    controller
        .handle_intent(
            &mut session,
            AppIntent::AddFormFieldChanged {
                field: FormField::Latitude,
                value: "abc".into(),
            },
        )
        .expect("Feld");

    let result = controller.handle_intent(&mut session, AppIntent::AddPointSubmitted);
    assert!(result.is_err());
    assert!(session.mode.is_adding());
    assert_eq!(session.engine.points().len(), 3);
    assert!(session.engine.modifications().is_empty());

    controller
        .handle_intent(&mut session, AppIntent::AddPointCancelled)
        .expect("Abbrechen");
    assert!(!session.mode.is_adding());
}

#[test]
fn test_delete_selected_renumbers_and_clears_selection() {
    let (mut controller, mut session) = loaded();

    for index in [0, 2] {
        controller
            .handle_intent(&mut session, AppIntent::PointSelectionToggled { index })
            .expect("Selektion");
    }
    assert_eq!(
        session.engine.delete_preview(),
        vec!["順序 1: 登山口".to_string(), "順序 3: 主峰".to_string()]
    );

    controller
        .handle_intent(&mut session, AppIntent::DeleteSelectedRequested)
        .expect("Loeschen");

    assert_eq!(orders(&session), vec!["1"]);
    assert!(session.engine.selection().is_empty());
    assert_eq!(session.status_line(), "0 added, 2 deleted, 0 modified");

    // ohne Selektion wird kein Command erzeugt
    let logged = session.command_log.len();
    controller
        .handle_intent(&mut session, AppIntent::DeleteSelectedRequested)
        .expect("nichts zu tun");
    assert_eq!(session.command_log.len(), logged);
}

#[test]
fn test_out_of_range_selection_is_ignored() {
    let (mut controller, mut session) = loaded();
    controller
        .handle_intent(&mut session, AppIntent::PointSelectionToggled { index: 7 })
        .expect("ignoriert");
    assert!(session.engine.selection().is_empty());
}

#[test]
fn test_export_writes_table_and_geojson() {
    let (mut controller, mut session) = loaded();
    let dir = tempfile::tempdir().expect("tempdir");
    session.options.export_dir = dir.path().to_path_buf();

    controller
        .handle_intent(&mut session, AppIntent::ExportRequested)
        .expect("Export");

    let table = std::fs::read_to_string(dir.path().join("yushan_route_a_edited.txt"))
        .expect("TSV vorhanden");
    let mut lines = table.lines();
    assert_eq!(
        lines.next(),
        Some("順序\t緯度\t經度\t海拔（約）\t類型\t名稱")
    );
    assert_eq!(
        lines.next(),
        Some("1\t23.000000\t121.000000\t2600\tcomm\t登山口")
    );
    assert_eq!(
        lines.next(),
        Some("2\t23.100000\t121.000000\tN/A\tgpx\tN/A")
    );

    let geojson = std::fs::read_to_string(dir.path().join("yushan_route_a_edited.geojson"))
        .expect("GeoJSON vorhanden");
    let reparsed = route_waypoint_editor::parse_route_document(&geojson).expect("lesbar");
    assert_eq!(reparsed.len(), 3);
}

#[test]
fn test_export_without_route_fails() {
    let mut controller = controller();
    let mut session = EditingSession::new();
    let result = controller.handle_intent(&mut session, AppIntent::ExportRequested);
    assert!(result.is_err());
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = controller();
    let mut session = EditingSession::new();

    controller
        .handle_intent(&mut session, AppIntent::ExitRequested)
        .expect("Exit");

    assert!(session.should_exit);
    assert_eq!(
        session.command_log.last_command(),
        Some(&AppCommand::RequestExit)
    );
}

#[test]
fn test_command_history_is_scoped_to_loaded_route() {
    let (mut controller, mut session) = loaded();
    controller
        .handle_intent(&mut session, AppIntent::PointSelectionToggled { index: 0 })
        .expect("Selektion");
    controller
        .handle_intent(&mut session, AppIntent::DeleteSelectedRequested)
        .expect("Loeschen");

    controller
        .handle_intent(
            &mut session,
            AppIntent::RouteSelected {
                name: "only_a".into(),
            },
        )
        .expect("Laden");
    assert_eq!(session.command_log.since_last_load().count(), 0);

    controller
        .handle_intent(&mut session, AppIntent::PointSelectionToggled { index: 1 })
        .expect("Selektion");
    let recent: Vec<_> = session.command_log.since_last_load().collect();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].route_name.as_deref(), Some("only_a"));
    assert_eq!(session.command_log.edits_since_last_load(), 0);
}
