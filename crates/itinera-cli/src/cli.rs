//! Command handlers and their clap argument wrappers
//!
//! Each wrapper carries clap-specific attributes and converts into the
//! matching core parameter structure:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Draft / Search → Service
//! ```
//!
//! Core parameter types stay free of clap derives; help text, flag names and
//! delimiters live here.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use itinera_core::{
    display::{Hotels, SettlementReport},
    fields::{FieldModel, InterestsField},
    models::{HotelSearch, PlanRequestDraft},
    params::{CreatePlan, HotelQuery, PlanIdParam},
    prepare, Clock, ItineraError, PlanningApi, SubmissionController, SubmissionError,
    SubmissionFailure, SubmitOutcome, SystemClock, Validator,
};
use log::{debug, info, warn};

use crate::renderer::TerminalRenderer;

/// Plan fields shared by `plan create` and `plan edit`
///
/// Unset fields take the creation defaults: today, 3 days, a medium budget.
#[derive(Args)]
pub struct PlanFieldArgs {
    /// Destination city or region
    #[arg(short, long, default_value = "")]
    pub location: String,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    pub start_date: Option<String>,
    /// Number of days
    #[arg(short, long)]
    pub days: Option<String>,
    /// Budget tier (low, medium, high) or an amount
    #[arg(short, long)]
    pub budget: Option<String>,
    /// Interest tags as a comma-separated list
    #[arg(short, long, value_delimiter = ',')]
    pub interests: Vec<String>,
    /// Weighted interest as Tag=score with score between 0 and 1; repeatable
    #[arg(long = "score", value_name = "TAG=SCORE")]
    pub scores: Vec<String>,
    /// Who is travelling: solo, spouse, family or friends
    #[arg(short, long)]
    pub travel_type: Option<String>,
}

impl From<PlanFieldArgs> for CreatePlan {
    fn from(val: PlanFieldArgs) -> Self {
        CreatePlan {
            location: val.location,
            start_date: val.start_date,
            days: val.days,
            budget: val.budget,
            interests: val.interests,
            scores: val.scores,
            travel_type: val.travel_type,
        }
    }
}

/// Show a generated plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Identifier returned when the plan was created")]
    pub plan_id: String,
}

impl From<ShowPlanArgs> for PlanIdParam {
    fn from(val: ShowPlanArgs) -> Self {
        PlanIdParam {
            plan_id: val.plan_id,
        }
    }
}

/// Regenerate an existing plan from a full set of fields
#[derive(Args)]
pub struct EditPlanArgs {
    #[arg(help = "Identifier of the plan to edit")]
    pub plan_id: String,
    #[command(flatten)]
    pub fields: PlanFieldArgs,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(PlanFieldArgs),
    /// Show a generated plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Edit a generated plan
    ///
    /// The plan is rebuilt from the flags alone. Fields left unset are not
    /// read from the stored plan: they take the creation defaults (today, 3
    /// days, a medium budget), so repeat every field you want to keep.
    #[command(alias = "e")]
    Edit(EditPlanArgs),
}

/// Search hotels for a stay
#[derive(Args)]
pub struct SearchHotelsArgs {
    /// City or region to search in
    pub location: String,
    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub checkin: String,
    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub checkout: String,
}

impl From<SearchHotelsArgs> for HotelQuery {
    fn from(val: SearchHotelsArgs) -> Self {
        HotelQuery {
            location: val.location,
            checkin: val.checkin,
            checkout: val.checkout,
        }
    }
}

#[derive(Subcommand)]
pub enum HotelCommands {
    /// Search hotels by location and dates
    #[command(alias = "s")]
    Search(SearchHotelsArgs),
}

/// Runs commands against a planning service and renders the results.
pub struct Cli<A> {
    controller: SubmissionController<A>,
    renderer: TerminalRenderer,
}

impl<A: PlanningApi> Cli<A> {
    pub fn new(api: A, renderer: TerminalRenderer) -> Self {
        Self {
            controller: SubmissionController::new(api),
            renderer,
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(args.into()).await,
            PlanCommands::Show(args) => self.show_plan(args.into()).await,
            PlanCommands::Edit(args) => {
                let id = PlanIdParam {
                    plan_id: args.plan_id,
                };
                self.edit_plan(id, args.fields.into()).await
            }
        }
    }

    pub async fn handle_hotel_command(&self, command: HotelCommands) -> Result<()> {
        match command {
            HotelCommands::Search(args) => self.search_hotels(args.into()).await,
        }
    }

    async fn create_plan(&self, params: CreatePlan) -> Result<()> {
        let draft = params.into_draft(SystemClock.today())?;
        warn_unknown_interests(&draft);
        debug!("Submitting draft for {}", draft.location());

        match self.controller.submit(&draft).await {
            SubmitOutcome::Settled(settlement) => {
                self.renderer.render(&SettlementReport(&settlement).to_string())?;
                if settlement.is_success() {
                    Ok(())
                } else {
                    bail!("Plan was not created")
                }
            }
            SubmitOutcome::Ignored => bail!("A plan submission is already in progress"),
        }
    }

    async fn show_plan(&self, param: PlanIdParam) -> Result<()> {
        let plan_id = param.plan_id()?;
        let plan = self
            .controller
            .api()
            .get_plan(&plan_id)
            .await
            .with_context(|| format!("Failed to fetch plan {plan_id}"))?;
        self.renderer.render(&plan.to_string())
    }

    async fn edit_plan(&self, param: PlanIdParam, params: CreatePlan) -> Result<()> {
        let plan_id = param.plan_id()?;
        let validator = Validator::new(SystemClock.today());
        let draft = params.into_draft(validator.today())?;
        warn_unknown_interests(&draft);

        let request = match prepare(&validator, &draft) {
            Ok(request) => request,
            Err(ItineraError::Validation(errors)) => {
                let failure = SubmissionFailure::Validation(errors);
                self.renderer.render(&failure.to_string())?;
                bail!("Plan was not edited")
            }
            Err(err) => return Err(err.into()),
        };

        info!("Editing plan {plan_id}");
        let plan = self
            .controller
            .api()
            .edit_plan(&plan_id, &request)
            .await
            .map_err(|err| anyhow!(SubmissionError::from_api(&err)))
            .with_context(|| format!("Failed to edit plan {plan_id}"))?;
        self.renderer.render(&plan.to_string())
    }

    async fn search_hotels(&self, query: HotelQuery) -> Result<()> {
        let search = HotelSearch::try_from(query)?;
        let hotels = self
            .controller
            .api()
            .search_hotels(&search)
            .await
            .with_context(|| format!("Failed to search hotels in {}", search.location()))?;
        self.renderer.render(&Hotels(hotels).to_string())
    }

    pub async fn check_health(&self) -> Result<()> {
        let health = self
            .controller
            .api()
            .check_health()
            .await
            .context("Planning service is unreachable")?;
        self.renderer.render(&health.to_string())?;
        if health.is_healthy() {
            Ok(())
        } else {
            bail!("Planning service is unhealthy")
        }
    }
}

/// Logs interests outside their catalog. The draft is sent unchanged.
fn warn_unknown_interests(draft: &PlanRequestDraft) {
    let interests = InterestsField.normalize(draft.interests());
    for tag in InterestsField.unknown_tags(&interests) {
        warn!("Interest '{tag}' is not in the catalog");
    }
}
