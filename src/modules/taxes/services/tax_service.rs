use std::sync::Arc;

use crate::core::{AppError, Kst, Result};
use crate::modules::tax_types::repositories::TaxTypeRepository;
use crate::modules::taxes::models::{CreateTaxRequest, Tax, TaxDetail, TaxView, WorkflowView};
use crate::modules::taxes::repositories::TaxRepository;
use crate::modules::workflow::{StatusWorkflow, TaxStatus};

/// Business logic for tax records. All status mutations funnel through
/// [`transition`](TaxService::transition): the workflow legality gate runs
/// against a fresh read, and the write is compare-and-swap so a concurrent
/// admin cannot slip a second transition underneath it.
#[derive(Clone)]
pub struct TaxService {
    taxes: Arc<dyn TaxRepository>,
    tax_types: Arc<dyn TaxTypeRepository>,
}

impl TaxService {
    pub fn new(taxes: Arc<dyn TaxRepository>, tax_types: Arc<dyn TaxTypeRepository>) -> Self {
        Self { taxes, tax_types }
    }

    /// Create a tax record seeded with the workflow's initial status for
    /// its tax type.
    pub async fn create_tax(&self, request: CreateTaxRequest, user_id: &str) -> Result<TaxView> {
        let tax_type = self
            .tax_types
            .find_by_id(&request.tax_type_id)
            .await?
            .ok_or_else(|| AppError::not_found("Tax type not found"))?;

        let tax = Tax::new(
            request.charge_station_id,
            &tax_type,
            request.amount,
            request.due_date,
            request.description,
        )?;
        self.taxes.create(&tax).await?;

        tracing::info!(
            tax_id = %tax.id,
            status = %tax.status,
            category = %tax_type.category,
            "tax record created"
        );

        let detail = self.load(&tax.id, user_id).await?;
        Ok(detail.to_view(Kst::today()))
    }

    pub async fn get_tax(&self, id: &str, user_id: &str) -> Result<TaxView> {
        let detail = self.load(id, user_id).await?;
        Ok(detail.to_view(Kst::today()))
    }

    pub async fn list_taxes(&self, user_id: &str) -> Result<Vec<TaxView>> {
        let today = Kst::today();
        let details = self.taxes.list_for_user(user_id).await?;
        Ok(details.iter().map(|d| d.to_view(today)).collect())
    }

    pub async fn search_taxes(&self, user_id: &str, query: &str) -> Result<Vec<TaxView>> {
        let today = Kst::today();
        let details = self.taxes.search(user_id, query).await?;
        Ok(details.iter().map(|d| d.to_view(today)).collect())
    }

    pub async fn delete_tax(&self, id: &str, user_id: &str) -> Result<()> {
        self.taxes.delete(id, user_id).await
    }

    /// Workflow affordances for one tax: current status and label, the
    /// canonical next step (absent at the terminal state), and every
    /// legal target.
    pub async fn workflow_view(&self, id: &str, user_id: &str) -> Result<WorkflowView> {
        let detail = self.load(id, user_id).await?;
        let today = Kst::today();

        Ok(WorkflowView {
            status_label: detail.tax.display_label(today).to_string(),
            overdue: detail.tax.is_overdue(today),
            next: StatusWorkflow::next_status(&detail.tax.status, detail.category),
            allowed: StatusWorkflow::allowed_targets(&detail.tax.status, detail.category),
            status: detail.tax.status,
        })
    }

    /// Apply the canonical forward step.
    pub async fn advance(&self, id: &str, user_id: &str) -> Result<TaxView> {
        let detail = self.load(id, user_id).await?;

        let next = StatusWorkflow::next_status(&detail.tax.status, detail.category)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "'{}' is a final status; there is no next step",
                    StatusWorkflow::status_label(&detail.tax.status)
                ))
            })?;

        self.apply_transition(detail, next, user_id).await
    }

    /// Apply an arbitrary requested transition, gated by the workflow
    /// legality table for the tax's category.
    pub async fn transition(&self, id: &str, user_id: &str, target: TaxStatus) -> Result<TaxView> {
        let detail = self.load(id, user_id).await?;
        self.apply_transition(detail, target, user_id).await
    }

    /// Gate, then write. The read that produced `detail` is the read the
    /// compare-and-swap is conditioned on; a lost race surfaces as a
    /// conflict and nothing is written.
    async fn apply_transition(
        &self,
        detail: TaxDetail,
        target: TaxStatus,
        user_id: &str,
    ) -> Result<TaxView> {
        let current = &detail.tax.status;

        if !StatusWorkflow::can_transition(current, target, detail.category) {
            return Err(AppError::validation(format!(
                "Status change from '{}' to '{}' is not allowed for this tax type",
                current, target
            )));
        }

        let today = Kst::today();
        let paid_date = Tax::paid_date_for(target, today);

        let swapped = self
            .taxes
            .update_status_cas(&detail.tax.id, current, target, paid_date)
            .await?;

        if !swapped {
            return Err(AppError::conflict(
                "Tax was modified concurrently; reload and try again",
            ));
        }

        tracing::info!(
            tax_id = %detail.tax.id,
            from = %current,
            to = %target,
            "tax status transitioned"
        );

        let updated = self.load(&detail.tax.id, user_id).await?;
        Ok(updated.to_view(today))
    }

    async fn load(&self, id: &str, user_id: &str) -> Result<TaxDetail> {
        self.taxes
            .find_detail(id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tax '{}' not found", id)))
    }
}
