use route_waypoint_editor::repository::ROUTE_FILE_NAME;
use route_waypoint_editor::{
    AppController, AppIntent, EditError, EditingSession, FsRouteRepository, RouteRepository,
    RouteVersion,
};
use std::path::Path;

const ROUTE_A: &str = include_str!("fixtures/yushan_route_a.geojson");
const ROUTE_B: &str = include_str!("fixtures/yushan_route_b.geojson");

fn write_route(root: &Path, name: &str, version: RouteVersion, text: &str) {
    let dir = root.join(version.dir_name()).join(name);
    std::fs::create_dir_all(&dir).expect("Ordner anlegbar");
    std::fs::write(dir.join(ROUTE_FILE_NAME), text).expect("Datei schreibbar");
}

#[test]
fn test_lists_only_folders_with_route_document() {
    let root = tempfile::tempdir().expect("tempdir");
    write_route(root.path(), "yushan", RouteVersion::A, ROUTE_A);
    write_route(root.path(), "jade", RouteVersion::A, ROUTE_A);
    write_route(root.path(), "only_b", RouteVersion::B, ROUTE_B);
    std::fs::create_dir_all(root.path().join("route_a").join("empty")).expect("Ordner");

    let repository = FsRouteRepository::new(root.path());
    assert_eq!(
        repository.list_routes().expect("Liste"),
        vec!["jade".to_string(), "yushan".to_string()]
    );
    assert!(repository.exists("only_b", RouteVersion::B));
    assert!(!repository.exists("only_b", RouteVersion::A));
}

#[test]
fn test_missing_data_root_yields_empty_list() {
    let root = tempfile::tempdir().expect("tempdir");
    let repository = FsRouteRepository::new(root.path().join("nowhere"));
    assert!(repository.list_routes().expect("leer").is_empty());
    assert!(matches!(
        repository.fetch("yushan", RouteVersion::A),
        Err(EditError::NotFound(_))
    ));
}

#[test]
fn test_controller_loads_from_filesystem() {
    let root = tempfile::tempdir().expect("tempdir");
    write_route(root.path(), "yushan", RouteVersion::A, ROUTE_A);
    write_route(root.path(), "yushan", RouteVersion::B, ROUTE_B);

    let mut controller = AppController::new(FsRouteRepository::new(root.path()));
    let mut session = EditingSession::new();
    controller
        .handle_intent(
            &mut session,
            AppIntent::RouteSelected {
                name: "yushan".into(),
            },
        )
        .expect("Laden");

    assert_eq!(session.engine.points().len(), 3);
    assert_eq!(
        session.engine.store().background().map(|b| b.len()),
        Some(2)
    );
}

#[test]
fn test_route_name_cannot_leave_data_root() {
    let root = tempfile::tempdir().expect("tempdir");
    let data_root = root.path().join("data");
    write_route(&data_root, "yushan", RouteVersion::A, ROUTE_A);
    // liegt neben data_root: route_a/../../outside/route.geojson
    let outside = root.path().join("outside");
    std::fs::create_dir_all(&outside).expect("Ordner");
    std::fs::write(outside.join(ROUTE_FILE_NAME), ROUTE_B).expect("Datei");

    let repository = FsRouteRepository::new(&data_root);
    assert!(matches!(
        repository.fetch("../../outside", RouteVersion::A),
        Err(EditError::Validation(_))
    ));
    assert!(!repository.exists("../../outside", RouteVersion::A));

    let mut controller = AppController::new(repository);
    let mut session = EditingSession::new();
    controller
        .handle_intent(
            &mut session,
            AppIntent::RouteSelected {
                name: "yushan".into(),
            },
        )
        .expect("Laden");
    let result = controller.handle_intent(
        &mut session,
        AppIntent::RouteSelected {
            name: "../../outside".into(),
        },
    );
    assert!(result.is_err());
    assert_eq!(session.route_name.as_deref(), Some("yushan"));
    assert_eq!(session.engine.points().len(), 3);
}
