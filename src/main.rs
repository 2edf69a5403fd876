//! Route Waypoint Editor.
//!
//! Zeilenorientiertes Frontend: liest Befehle von stdin, uebersetzt sie in
//! `AppIntent`s und gibt danach Tabelle bzw. Statuszeile aus.

use route_waypoint_editor::app::{FormField, PointEdit};
use route_waypoint_editor::export::{write_table, TSV_HEADER};
use route_waypoint_editor::{
    AppController, AppIntent, EditingSession, EditorMode, EditorOptions, FsRouteRepository,
    LatLng, PointKind, RouteVersion,
};
use std::io::{self, Write};
use std::path::PathBuf;

const HELP: &str = "\
Befehle:
  routes                      Routenliste anzeigen
  load <name>                 Route laden (aktive Variante)
  version a|b                 Variante wechseln
  click <lat> <lng>           Kartenklick
  add                         Formular oeffnen
  set <feld> <wert>           Formularfeld setzen (lat, lng, ele, name, type, position)
  submit | cancel             Formular abschicken / schliessen
  select <order>              Selektion umschalten (clear = alle abwaehlen)
  delete                      Selektierte Punkte loeschen
  edit <order> <feld> <wert>  Punkt aendern (name, type, ele; '-' leert)
  list | status               Tabelle / Statuszeile
  history                     Commands seit dem letzten Laden
  export                      TSV + GeoJSON schreiben
  gpx-import <pfad>           GPX als aktive Route laden
  gpx-export                  Aktive Route als GPX schreiben
  quit";

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Route Waypoint Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);
        let repository = FsRouteRepository::new(options.data_root.clone());

        let mut session = EditingSession::with_options(options);
        let mut controller = AppController::new(repository);

        if let Err(e) = controller.handle_intent(&mut session, AppIntent::RouteListRequested) {
            log::error!("{:#}", e);
        }

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut line = String::new();

        while !session.should_exit {
            write!(stdout, "> ")?;
            stdout.flush()?;

            line.clear();
            if stdin.read_line(&mut line)? == 0 {
                break;
            }

            match parse_line(&line, &session) {
                Ok(Some(Action::Intent(intent))) => {
                    let lists_routes = matches!(intent, AppIntent::RouteListRequested);
                    let confirmed = match &intent {
                        AppIntent::DeleteSelectedRequested => confirm_delete(&session),
                        _ => true,
                    };
                    if confirmed {
                        if let Err(e) = controller.handle_intent(&mut session, intent) {
                            log::error!("{:#}", e);
                        }
                        if lists_routes {
                            print_routes(&session);
                        } else {
                            print_after_mutation(&session);
                        }
                    }
                }
                Ok(Some(Action::List)) => print_table(&session),
                Ok(Some(Action::Status)) => print_status(&session),
                Ok(Some(Action::History)) => print_history(&session),
                Ok(Some(Action::Help)) => println!("{HELP}"),
                Ok(None) => {}
                Err(message) => println!("{message}"),
            }
        }

        log::info!("Route Waypoint Editor beendet");
        Ok(())
    }
}

/// Ergebnis einer eingelesenen Zeile.
#[derive(Debug, PartialEq)]
enum Action {
    Intent(AppIntent),
    List,
    Status,
    History,
    Help,
}

/// Uebersetzt eine Eingabezeile. `Ok(None)` bei Leerzeile.
fn parse_line(line: &str, session: &EditingSession) -> Result<Option<Action>, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = parts.collect();

    let intent = match command {
        "routes" => AppIntent::RouteListRequested,
        "load" => AppIntent::RouteSelected {
            name: joined(&rest, "load <name>")?,
        },
        "version" => {
            let value = joined(&rest, "version a|b")?;
            let version = RouteVersion::parse(&value)
                .ok_or_else(|| format!("Unbekannte Variante: {value}"))?;
            AppIntent::VersionSelected { version }
        }
        "click" => {
            let [lat, lng] = rest.as_slice() else {
                return Err("Aufruf: click <lat> <lng>".into());
            };
            AppIntent::MapClicked {
                position: LatLng::new(parse_number(lat)?, parse_number(lng)?),
            }
        }
        "add" => AppIntent::AddPointRequested,
        "set" => {
            let (field, value) = rest
                .split_first()
                .ok_or_else(|| "Aufruf: set <feld> <wert>".to_string())?;
            let field =
                FormField::parse(field).ok_or_else(|| format!("Unbekanntes Feld: {field}"))?;
            AppIntent::AddFormFieldChanged {
                field,
                value: value.join(" "),
            }
        }
        "submit" => AppIntent::AddPointSubmitted,
        "cancel" => AppIntent::AddPointCancelled,
        "select" => match rest.as_slice() {
            ["clear"] => AppIntent::SelectionCleared,
            [order] => AppIntent::PointSelectionToggled {
                index: order_to_index(order)?,
            },
            _ => return Err("Aufruf: select <order>|clear".into()),
        },
        "delete" => AppIntent::DeleteSelectedRequested,
        "edit" => {
            let [order, field, value @ ..] = rest.as_slice() else {
                return Err("Aufruf: edit <order> <feld> <wert>".into());
            };
            AppIntent::PointEditRequested {
                index: order_to_index(order)?,
                edit: parse_point_edit(field, &value.join(" "))?,
            }
        }
        "list" => return Ok(Some(Action::List)),
        "status" => return Ok(Some(Action::Status)),
        "history" => return Ok(Some(Action::History)),
        "help" | "?" => return Ok(Some(Action::Help)),
        "export" => AppIntent::ExportRequested,
        "gpx-import" => AppIntent::GpxImportRequested {
            path: PathBuf::from(joined(&rest, "gpx-import <pfad>")?),
        },
        "gpx-export" => AppIntent::GpxExportRequested,
        "quit" | "exit" => AppIntent::ExitRequested,
        other => {
            if session.mode.is_adding() {
                return Err(format!("Unbekannter Befehl: {other} (Formular offen)"));
            }
            return Err(format!("Unbekannter Befehl: {other} ('help' zeigt alle)"));
        }
    };

    Ok(Some(Action::Intent(intent)))
}

fn joined(rest: &[&str], usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        return Err(format!("Aufruf: {usage}"));
    }
    Ok(rest.join(" "))
}

fn parse_number(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Keine gueltige Zahl: {value}"))
}

/// Tabellen-Reihenfolge ist 1-basiert.
fn order_to_index(order: &str) -> Result<usize, String> {
    match order.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("Ungueltige Reihenfolge: {order}")),
    }
}

fn parse_point_edit(field: &str, value: &str) -> Result<PointEdit, String> {
    let cleared = value.is_empty() || value == "-";
    let mut edit = PointEdit::default();
    match FormField::parse(field) {
        Some(FormField::Name) => {
            edit.name = Some(if cleared { String::new() } else { value.to_string() });
        }
        Some(FormField::Kind) => {
            edit.kind = Some(if cleared {
                PointKind::Unspecified
            } else {
                PointKind::from_label(value)
            });
        }
        Some(FormField::Elevation) => {
            edit.elevation = Some(if cleared {
                None
            } else {
                Some(parse_number(value)?)
            });
        }
        _ => return Err(format!("Nicht aenderbares Feld: {field}")),
    }
    Ok(edit)
}

fn confirm_delete(session: &EditingSession) -> bool {
    let preview = session.engine.delete_preview();
    if preview.is_empty() {
        return true;
    }
    println!("Folgende Punkte loeschen?");
    for line in &preview {
        println!("  {line}");
    }
    print!("[j/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "j" | "J" | "y" | "Y")
}

fn print_routes(session: &EditingSession) {
    if session.available_routes.is_empty() {
        println!("(keine Routen unter {})", session.options.data_root.display());
        return;
    }
    for name in &session.available_routes {
        println!("  {name}");
    }
}

fn print_table(session: &EditingSession) {
    let rows = session.engine.table_rows();
    if rows.is_empty() {
        println!("{}", TSV_HEADER.join("\t"));
        return;
    }
    let table = write_table(&rows);
    let mut lines = table.lines();
    if let Some(header) = lines.next() {
        println!("   \t{header}");
    }
    for (row, line) in rows.iter().zip(lines) {
        let marker = if row.selected { "[x]" } else { "[ ]" };
        println!("{marker}\t{line}");
    }
}

fn print_status(session: &EditingSession) {
    let route = match &session.route_name {
        Some(name) => format!("{name} ({})", session.version),
        None => format!("keine Route ({})", session.version),
    };
    println!("{route} | {} Punkte", session.engine.points().len());
    if let EditorMode::Adding(form) = &session.mode {
        println!(
            "Formular: lat={} lng={} ele={} name={} type={} position={}",
            form.latitude,
            form.longitude,
            form.elevation,
            form.name,
            form.kind.label().unwrap_or("-"),
            form.position.label()
        );
    }
    let status = session.status_line();
    if !status.is_empty() {
        println!("{status}");
    }
}

fn print_history(session: &EditingSession) {
    let log = &session.command_log;
    for (i, entry) in log.since_last_load().enumerate() {
        let marker = if entry.edits_route() { "*" } else { " " };
        println!("{:>3} {marker} {:?}", i + 1, entry.command);
    }
    println!(
        "{} Aenderungs-Commands seit dem Laden",
        log.edits_since_last_load()
    );
}

fn print_after_mutation(session: &EditingSession) {
    if session.should_exit {
        return;
    }
    print_table(session);
    print_status(session);
}
