use clap::Parser;
use sheetcast::application::{
    broadcast, compose_at, init::init, load_records, send_single, ComposeOptions, ProfileService,
};
use sheetcast::cli::{
    confirm, format_columns, format_profile, format_profile_list, format_progress, page_previews,
    render_html, Cli, Commands, ProfileAction, Selection,
};
use sheetcast::error::SheetcastError;
use sheetcast::infrastructure::{FileSystemRepository, SheetData, TokenCache, WeComClient};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), SheetcastError> {
    match cli.command {
        Commands::Init { path } => init(&path),

        Commands::Profile { action } => {
            let repo = FileSystemRepository::discover()?;
            let service = ProfileService::new(repo);
            run_profile_action(&service, action)
        }

        Commands::Columns { file } => {
            let sheet = SheetData::open(&file)?;
            print!("{}", format_columns(sheet.header()?));
            Ok(())
        }

        Commands::Preview {
            file,
            selection,
            row,
            html,
            interactive,
        } => {
            let records = load_records(&file, &selection.to, &selection.fields)?;
            let options = compose_options(&selection);

            if interactive {
                let stdin = std::io::stdin();
                let mut reader = stdin.lock();
                let mut writer = std::io::stdout();
                page_previews(&records, &options, row, html, &mut reader, &mut writer)
            } else {
                let message = compose_at(&records, row, &options)?;
                if html {
                    println!("{}", render_html(&message.preview));
                } else {
                    println!("{}", message.preview);
                }
                Ok(())
            }
        }

        Commands::Send {
            file,
            selection,
            row,
            profile,
        } => {
            let client = build_client(profile.as_deref())?;
            let records = load_records(&file, &selection.to, &selection.fields)?;
            let options = compose_options(&selection);

            let outcome = send_single(&client, &records, row, &options)?;
            println!(
                "Message sent to {} (row {})",
                outcome.recipient, outcome.position
            );
            Ok(())
        }

        Commands::Broadcast {
            file,
            selection,
            profile,
            yes,
        } => {
            let client = build_client(profile.as_deref())?;
            let records = load_records(&file, &selection.to, &selection.fields)?;
            let options = compose_options(&selection);

            if !yes {
                let question = format!("Send {} messages?", records.data_rows());
                let stdin = std::io::stdin();
                let mut reader = stdin.lock();
                let mut writer = std::io::stdout();
                if !confirm(&question, &mut reader, &mut writer)? {
                    println!("Broadcast cancelled");
                    return Ok(());
                }
            }

            let sent = broadcast(&client, &records, &options, |progress| {
                println!("{}", format_progress(progress));
            })?;
            println!("Broadcast complete, {} rows sent", sent);
            Ok(())
        }

        Commands::SendFile {
            file,
            user,
            profile,
        } => {
            let client = build_client(profile.as_deref())?;
            client.send_file(&user, &file)?;
            println!("File sent to {}", user);
            Ok(())
        }
    }
}

fn run_profile_action(
    service: &ProfileService,
    action: ProfileAction,
) -> Result<(), SheetcastError> {
    match action {
        ProfileAction::List => {
            let profiles = service.list()?;
            print!("{}", format_profile_list(&profiles));
            Ok(())
        }
        ProfileAction::Show { name } => {
            let profile = service.show(&name)?;
            print!("{}", format_profile(&name, &profile));
            Ok(())
        }
        ProfileAction::Add { name } => {
            service.add(&name)?;
            println!("Added profile '{}'", name);
            Ok(())
        }
        ProfileAction::Remove { name } => {
            service.remove(&name)?;
            println!("Removed profile '{}'", name);
            Ok(())
        }
        ProfileAction::Rename { old, new } => {
            service.rename(&old, &new)?;
            println!("Renamed profile '{}' to '{}'", old, new);
            Ok(())
        }
        ProfileAction::Set { name, key, value } => {
            service.set_field(&name, &key, &value)?;
            println!("Set {} on '{}'", key, name);
            Ok(())
        }
        ProfileAction::Default { name } => {
            service.set_default(&name)?;
            println!("Default profile is now '{}'", name);
            Ok(())
        }
    }
}

fn compose_options(selection: &Selection) -> ComposeOptions {
    ComposeOptions {
        title: selection.title.clone(),
        emphasis: selection.markdown,
    }
}

fn build_client(profile: Option<&str>) -> Result<WeComClient, SheetcastError> {
    let repo = FileSystemRepository::discover()?;
    let service = ProfileService::new(repo.clone());
    let (_, profile) = service.resolve(profile)?;

    let token_cache = TokenCache::new(repo.token_cache_path());
    WeComClient::new(&profile, token_cache)
}
