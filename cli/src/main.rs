mod api;
mod error;
mod store;


use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use shortlink::signup::signup_outcome;
use shortlink::validation::{OrganizationForm, SignupForm, UrlForm, validate_login, validate_url_edit};
use shortlink::{
    ApiRequest, AuthController, AuthPhase, Method, Organization, Page, PageQuery, Session, ShortUrl, SignInResponse,
    UpdateUrlRequest, endpoints,
};

use crate::api::ApiClient;
use crate::error::CliError;
use crate::store::{FileSessionStore, default_session_path};

#[derive(Parser, Debug)]
#[command(name = "shortlink", about = "Shortlink URL shortener CLI")]
struct Cli {
    #[arg(long, env = "SHORTLINK_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    #[arg(long, env = "SHORTLINK_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the host server answers `/healthz`.
    Ping,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SHORTLINK_PASSWORD")]
        password: String,
    },
    Logout,
    Signup {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "SHORTLINK_PASSWORD")]
        password: String,
    },
    Whoami,
    Org(OrgCommand),
    Url(UrlCommand),
}

#[derive(Args, Debug)]
struct OrgCommand {
    #[command(subcommand)]
    command: OrgSubcommand,
}

#[derive(Subcommand, Debug)]
enum OrgSubcommand {
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        short_name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        short_name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct UrlCommand {
    #[command(subcommand)]
    command: UrlSubcommand,
}

#[derive(Subcommand, Debug)]
enum UrlSubcommand {
    /// Every short URL visible to the signed-in user.
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Short URLs created by the signed-in user.
    Mine {
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Short URLs owned by one organization.
    Org {
        organization_id: i64,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        organization_id: i64,
        #[arg(long)]
        original_url: String,
        #[arg(long, default_value = "")]
        code: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// `YYYY-MM-DDTHH:MM`
        #[arg(long, default_value = "")]
        expires_at: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        original_url: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
    Delete {
        id: i64,
    },
}

struct CliContext {
    api: ApiClient,
    auth: AuthController<FileSessionStore>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let store = FileSessionStore::new(cli.session_file.unwrap_or_else(default_session_path));
    let mut ctx = CliContext { api: ApiClient::new(&cli.base_url)?, auth: AuthController::new(store) };
    ctx.auth.initialize(now_ms());

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Login { email, password } => run_login(&mut ctx, &email, &password).await,
        Command::Logout => run_logout(&mut ctx),
        Command::Signup { first_name, last_name, email, password } => {
            let form = SignupForm { first_name, last_name, email, confirm_password: password.clone(), password };
            run_signup(&ctx, &form).await
        }
        Command::Whoami => run_whoami(&ctx),
        Command::Org(org) => {
            let result = run_org(&ctx, org.command).await;
            observe(&mut ctx, result)
        }
        Command::Url(url) => {
            let result = run_url(&ctx, url.command).await;
            observe(&mut ctx, result)
        }
    }
}

/// Drop the stored session when the backend rejected its token.
fn observe(ctx: &mut CliContext, result: Result<(), CliError>) -> Result<(), CliError> {
    if let Err(CliError::Api(error)) = &result {
        if ctx.auth.observe(error) {
            eprintln!("session rejected by the backend; stored session cleared");
        }
    }
    result
}

fn require_session(ctx: &CliContext) -> Result<&Session, CliError> {
    ctx.auth.session().ok_or(CliError::NotLoggedIn)
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let request = ApiRequest { method: Method::Get, path: "/healthz".to_owned(), body: None, authorization: None };
    let (status, body) = ctx.api.send(&request).await?;
    print_json(&json!({ "status": status, "body": body }))
}

async fn run_login(ctx: &mut CliContext, email: &str, password: &str) -> Result<(), CliError> {
    let (email, password) = validate_login(email, password)?;
    let response: SignInResponse = ctx.api.fetch(endpoints::auth::signin(&email, &password)).await?;
    let session = Session::from(response);
    let request = endpoints::organizations::list(&session, &PageQuery::page(0));
    ctx.auth.sign_in(session);
    eprintln!("session saved to {}", ctx.auth.store().path().display());

    match ctx.api.fetch::<Page<Organization>>(request).await {
        Ok(page) => ctx.auth.set_organizations(page.content),
        Err(CliError::Api(error)) if ctx.auth.observe(&error) => {
            eprintln!("session rejected by the backend; stored session cleared");
            return Err(CliError::Api(error));
        }
        Err(error) => eprintln!("warning: could not load organizations: {error}"),
    }
    print_json(&ctx.auth.session().map(|s| &s.user))
}

fn run_logout(ctx: &mut CliContext) -> Result<(), CliError> {
    ctx.auth.sign_out();
    eprintln!("logged out");
    Ok(())
}

async fn run_signup(ctx: &CliContext, form: &SignupForm) -> Result<(), CliError> {
    let fields = form.validate()?;
    let request = endpoints::auth::signup(&fields.first_name, &fields.last_name, &fields.email, &fields.password);
    let (status, body) = ctx.api.send(&request).await?;
    let outcome = signup_outcome(status, &body)?;
    if !outcome.success {
        return Err(CliError::SignupRefused(outcome.message));
    }
    println!("{}", outcome.message);
    Ok(())
}

fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    match ctx.auth.phase() {
        AuthPhase::Authenticated(session) => print_json(&json!({
            "user": session.user,
            "displayName": session.user.display_name(),
            "organizations": session.organizations,
        })),
        _ => Err(CliError::NotLoggedIn),
    }
}

async fn run_org(ctx: &CliContext, command: OrgSubcommand) -> Result<(), CliError> {
    let session = require_session(ctx)?;
    match command {
        OrgSubcommand::List { page } => {
            let page: Page<Organization> =
                ctx.api.fetch(endpoints::organizations::list(session, &PageQuery::page(page))).await?;
            print_json(&page)
        }
        OrgSubcommand::Get { id } => {
            let org: Organization = ctx.api.fetch(endpoints::organizations::get(session, id)).await?;
            print_json(&org)
        }
        OrgSubcommand::Create { name, short_name, description } => {
            let body = OrganizationForm { name, short_name, description }.validate()?;
            let org: Organization = ctx.api.fetch(endpoints::organizations::create(session, &body)).await?;
            print_json(&org)
        }
        OrgSubcommand::Update { id, name, short_name, description } => {
            let body = OrganizationForm { name, short_name, description }.validate()?;
            let org: Organization = ctx.api.fetch(endpoints::organizations::update(session, id, &body)).await?;
            print_json(&org)
        }
        OrgSubcommand::Delete { id } => {
            let message = ctx.api.ack(endpoints::organizations::delete(session, id)).await?;
            print_json(&json!({ "deleted": id, "message": message }))
        }
    }
}

async fn run_url(ctx: &CliContext, command: UrlSubcommand) -> Result<(), CliError> {
    let session = require_session(ctx)?;
    match command {
        UrlSubcommand::List { page } => {
            let page: Page<ShortUrl> = ctx.api.fetch(endpoints::urls::list_all(session, &PageQuery::page(page))).await?;
            print_json(&page)
        }
        UrlSubcommand::Mine { page } => {
            let page: Page<ShortUrl> =
                ctx.api.fetch(endpoints::urls::list_mine(session, &PageQuery::page(page))).await?;
            print_json(&page)
        }
        UrlSubcommand::Org { organization_id, page } => {
            let request = endpoints::urls::list_by_organization(session, organization_id, &PageQuery::page(page));
            let page: Page<ShortUrl> = ctx.api.fetch(request).await?;
            print_json(&page)
        }
        UrlSubcommand::Get { id } => {
            let url: ShortUrl = ctx.api.fetch(endpoints::urls::get(session, id)).await?;
            print_json(&url)
        }
        UrlSubcommand::Create { organization_id, original_url, code, title, description, expires_at } => {
            let body = UrlForm {
                organization_id: Some(organization_id),
                original_url,
                custom_short_code: code,
                title,
                description,
                expires_at,
            }
            .validate()?;
            let url: ShortUrl = ctx.api.fetch(endpoints::urls::create(session, &body)).await?;
            print_json(&url)
        }
        UrlSubcommand::Update { id, original_url, title } => {
            let current: ShortUrl = ctx.api.fetch(endpoints::urls::get(session, id)).await?;
            let title = title.or_else(|| current.title.clone()).unwrap_or_default();
            let original_url = original_url.unwrap_or_else(|| current.original_url.clone());
            let (title, original_url) = validate_url_edit(&title, &original_url)?;
            let body = UpdateUrlRequest::edit(&current, &title, &original_url);
            let url: ShortUrl = ctx.api.fetch(endpoints::urls::update(session, id, &body)).await?;
            print_json(&url)
        }
        UrlSubcommand::Delete { id } => {
            let message = ctx.api.ack(endpoints::urls::delete(session, id)).await?;
            print_json(&json!({ "deleted": id, "message": message }))
        }
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
