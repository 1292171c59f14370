#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use roulement::{
    editor::Editor,
    io,
    rotation,
    schedule::{current_week, generate, week_assignment, WEEKS_PER_YEAR},
    storage::{load_configuration, ConfigStore, JsonStorage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning tournant (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration
    #[arg(long, global = true, default_value = "roulement.json")]
    config: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher le planning d'une année (ou d'une semaine)
    Show {
        /// Année (défaut : année courante)
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        week: Option<u32>,
    },

    /// Afficher la semaine en cours
    Current,

    /// Exporter le planning d'une année
    Export {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Ajouter un employé
    AddEmployee {
        #[arg(long)]
        name: String,
    },

    /// Retirer un employé
    RemoveEmployee {
        #[arg(long)]
        name: String,
    },

    /// Renommer un employé
    RenameEmployee {
        #[arg(long)]
        name: String,
        #[arg(long)]
        to: String,
    },

    /// Fixer le créneau de départ d'un employé
    SetSlot {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        slot: i64,
    },

    /// Importer des employés depuis un CSV
    ImportEmployees {
        #[arg(long)]
        csv: String,
    },

    /// Ajouter un créneau
    AddTimeslot {
        #[arg(long)]
        time: String,
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Retirer un créneau
    RemoveTimeslot {
        #[arg(long)]
        time: String,
    },

    /// Déplacer une entrée de l'ordre d'astreinte
    MoveOnCall {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },

    /// Semaine de phase zéro de la rotation
    SetStartWeek {
        #[arg(long, allow_hyphen_values = true)]
        week: i64,
    },

    /// Position de départ dans l'ordre d'astreinte
    SetOnCallStart {
        #[arg(long)]
        index: usize,
    },

    /// Vérifier la configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.config)?;
    let mut editor = Editor::new(load_configuration(&storage)?);
    let this_year = Local::now().year();

    let code = match cli.cmd {
        Commands::Show { year, week } => {
            let year = year.unwrap_or(this_year);
            match week {
                Some(w) if w == 0 || w > WEEKS_PER_YEAR => {
                    bail!("week must be between 1 and {WEEKS_PER_YEAR}")
                }
                Some(w) => match week_assignment(editor.config(), year, w) {
                    Some(wa) => println!("{wa}"),
                    None => println!("(empty schedule)"),
                },
                None => {
                    let schedule = generate(editor.config(), year);
                    if schedule.is_empty() {
                        println!("(empty schedule)");
                    }
                    for wa in &schedule {
                        println!("{wa}");
                    }
                }
            }
            0
        }
        Commands::Current => {
            let today = Local::now().date_naive();
            match current_week(editor.config(), today) {
                Some(wa) => println!("{wa}"),
                None => println!("(no schedule for the current week)"),
            }
            0
        }
        Commands::Export {
            year,
            out_json,
            out_csv,
        } => {
            let schedule = generate(editor.config(), year.unwrap_or(this_year));
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            println!("{} week(s) exported", schedule.len());
            0
        }
        Commands::AddEmployee { name } => {
            editor.add_employee(&name)?;
            storage.save(editor.config())?;
            0
        }
        Commands::RemoveEmployee { name } => {
            let idx = editor.employee_index(&name)?;
            editor.remove_employee(idx)?;
            storage.save(editor.config())?;
            0
        }
        Commands::RenameEmployee { name, to } => {
            let idx = editor.employee_index(&name)?;
            editor.rename_employee(idx, &to)?;
            storage.save(editor.config())?;
            0
        }
        Commands::SetSlot { name, slot } => {
            let idx = editor.employee_index(&name)?;
            editor.set_initial_slot(idx, slot)?;
            storage.save(editor.config())?;
            0
        }
        Commands::ImportEmployees { csv } => {
            let rows = io::import_employees_csv(csv)?;
            // tout ou rien : on travaille sur une copie
            let mut staged = editor.clone();
            for (name, slot) in rows {
                let idx = staged.add_employee(&name)?;
                if let Some(slot) = slot {
                    staged.set_initial_slot(idx, slot)?;
                }
            }
            editor = staged;
            storage.save(editor.config())?;
            0
        }
        Commands::AddTimeslot { time, note } => {
            editor.add_timeslot(&time, &note)?;
            storage.save(editor.config())?;
            0
        }
        Commands::RemoveTimeslot { time } => {
            let Some(idx) = editor.find_timeslot(&time) else {
                bail!("unknown timeslot: {time}");
            };
            editor.remove_timeslot(idx)?;
            storage.save(editor.config())?;
            0
        }
        Commands::MoveOnCall { from, to } => {
            editor.move_on_call(from, to)?;
            storage.save(editor.config())?;
            0
        }
        Commands::SetStartWeek { week } => {
            editor.set_start_week(week);
            storage.save(editor.config())?;
            0
        }
        Commands::SetOnCallStart { index } => {
            editor.set_on_call_start_index(index)?;
            storage.save(editor.config())?;
            0
        }
        Commands::Check => {
            let config = editor.config();
            let mut problems = 0;
            if let Err(err) = config.validate() {
                eprintln!("invalid configuration: {err}");
                problems += 1;
            }
            if rotation::needs_on_call_repair(config) {
                eprintln!(
                    "on-call order has {} entries for {} employee(s); identity order will be used",
                    config.on_call_order.len(),
                    config.employees.len()
                );
                problems += 1;
            }
            if config.is_degenerate() {
                eprintln!("no employee or no timeslot: schedule is empty");
            }
            if problems == 0 {
                println!("OK: configuration is consistent");
                0
            } else {
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
