//! Document CRUD commands.

use clap::Args;
use serde_json::Value;

use backoffice_core::error::AppError;
use backoffice_core::types::{Document, ListParams};
use backoffice_database::DeleteOutcome;
use backoffice_entity::affiliate::{Card, Member, Membership};
use backoffice_entity::auth::{Account, Role};
use backoffice_entity::command::Order;
use backoffice_entity::dishes::DishItem;
use backoffice_entity::manage::{ManagerAccount, ManagerRole};
use backoffice_entity::reviews::Comment;
use backoffice_entity::scm::Supplier;
use backoffice_entity::system::{Brand, DataLevel, Organization, SigninLog, Store};
use backoffice_entity::trade::{PayFlow, RefundFlow};
use backoffice_entity::{Resource, ResourceKind};

use super::Context;
use crate::output::{self, OutputFormat};

/// Run `$body` with `$ty` bound to the schema of `$kind`.
macro_rules! with_resource {
    ($kind:expr, $ty:ident => $body:expr) => {
        match $kind {
            ResourceKind::Account => { type $ty = Account; $body }
            ResourceKind::Role => { type $ty = Role; $body }
            ResourceKind::Member => { type $ty = Member; $body }
            ResourceKind::Membership => { type $ty = Membership; $body }
            ResourceKind::Card => { type $ty = Card; $body }
            ResourceKind::DishItem => { type $ty = DishItem; $body }
            ResourceKind::Supplier => { type $ty = Supplier; $body }
            ResourceKind::Comment => { type $ty = Comment; $body }
            ResourceKind::Order => { type $ty = Order; $body }
            ResourceKind::PayFlow => { type $ty = PayFlow; $body }
            ResourceKind::RefundFlow => { type $ty = RefundFlow; $body }
            ResourceKind::Brand => { type $ty = Brand; $body }
            ResourceKind::Store => { type $ty = Store; $body }
            ResourceKind::DataLevel => { type $ty = DataLevel; $body }
            ResourceKind::Organization => { type $ty = Organization; $body }
            ResourceKind::SigninLog => { type $ty = SigninLog; $body }
            ResourceKind::ManagerAccount => { type $ty = ManagerAccount; $body }
            ResourceKind::ManagerRole => { type $ty = ManagerRole; $body }
        }
    };
}

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Resource name (see `resources`)
    pub resource: ResourceKind,
    /// JSON object of field to value, e.g. '{"name":"bar"}'
    #[arg(long)]
    pub filter: Option<String>,
    /// JSON array, e.g. '["name","DESC"]'
    #[arg(long)]
    pub sort: Option<String>,
    /// Inclusive JSON bounds, e.g. '[0,24]'
    #[arg(long)]
    pub range: Option<String>,
}

/// Arguments for `get`
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Resource name
    pub resource: ResourceKind,
    /// Document ID
    pub id: String,
}

/// Arguments for `create`
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Resource name
    pub resource: ResourceKind,
    /// Document body as JSON
    pub json: String,
}

/// Arguments for `update`
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Resource name
    pub resource: ResourceKind,
    /// Document ID
    pub id: String,
    /// Fields to overwrite as a JSON object; empty values are ignored
    pub json: String,
}

/// Arguments for `delete`
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Resource name
    pub resource: ResourceKind,
    /// Document ID
    pub id: String,
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Execute `list`
pub async fn list(args: &ListArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let params = ListParams {
        filter: args.filter.clone(),
        sort: args.sort.clone(),
        range: args.range.clone(),
    };
    with_resource!(args.resource, T => list_typed::<T>(ctx, params, format).await)
}

async fn list_typed<T: Resource>(
    ctx: &Context,
    params: ListParams,
    format: OutputFormat,
) -> Result<(), AppError> {
    let page = ctx
        .repo::<T>()
        .list_with(ctx.merchant_id(), params)
        .await?
        .try_map(serde_json::to_value)?;
    output::print_page(&page, T::DESCRIPTOR.reference_key, format);
    Ok(())
}

/// Execute `get`
pub async fn get(args: &GetArgs, ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    with_resource!(args.resource, T => {
        let doc = ctx.repo::<T>().detail(ctx.merchant_id(), &args.id).await?;
        output::print_item(&doc, format);
        Ok(())
    })
}

/// Execute `create`
pub async fn create(args: &CreateArgs, ctx: &Context) -> Result<(), AppError> {
    with_resource!(args.resource, T => {
        let doc: T = serde_json::from_str(&args.json)?;
        let id = ctx.repo::<T>().create(ctx.merchant_id(), doc).await?;
        output::print_success(&format!("Created {} {id}", args.resource));
        Ok(())
    })
}

/// Execute `update`
pub async fn update(args: &UpdateArgs, ctx: &Context) -> Result<(), AppError> {
    let fields = match serde_json::from_str::<Value>(&args.json)? {
        Value::Object(fields) => fields,
        _ => return Err(AppError::validation("Update body must be a JSON object")),
    };
    with_resource!(args.resource, T => update_typed::<T>(ctx, &args.id, fields).await)?;
    output::print_success(&format!("Updated {} {}", args.resource, args.id));
    Ok(())
}

async fn update_typed<T: Resource>(ctx: &Context, id: &str, fields: Document) -> Result<(), AppError> {
    // Values of the wrong type fail here, before the store is touched.
    serde_json::from_value::<T>(Value::Object(fields.clone()))?;
    ctx.repo::<T>().update_fields(ctx.merchant_id(), id, fields).await
}

/// Execute `delete`
pub async fn delete(args: &DeleteArgs, ctx: &Context) -> Result<(), AppError> {
    if !args.yes {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!("Delete {} {}?", args.resource, args.id))
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let outcome = with_resource!(args.resource, T => {
        ctx.repo::<T>().delete(ctx.merchant_id(), &args.id).await?
    });
    match outcome {
        DeleteOutcome::Deleted => {
            output::print_success(&format!("Deleted {} {}", args.resource, args.id))
        }
        DeleteOutcome::NothingDeleted => output::print_warning("Nothing deleted."),
    }
    Ok(())
}
