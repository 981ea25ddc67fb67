use crate::orders::{
    consolidate, summarize_preview, ConsolidationGroup, ConsolidationSummary, SubOrder,
};

use super::{ServiceError, ServiceResult};

pub struct ConsolidationService;

impl ConsolidationService {
    /// Preview of the shipments that would result from sending `selected`.
    pub fn preview(selected: &[SubOrder]) -> Vec<ConsolidationGroup> {
        consolidate(selected)
    }

    pub fn summary(groups: &[ConsolidationGroup]) -> ConsolidationSummary {
        summarize_preview(groups)
    }

    /// Validates a selection before it is handed to the shipping backend:
    /// every id must resolve to a pending sub-order.
    pub fn select(pending: &[SubOrder], selected_ids: &[String]) -> ServiceResult<Vec<SubOrder>> {
        let mut selection = Vec::with_capacity(selected_ids.len());
        for id in selected_ids {
            let order = pending
                .iter()
                .find(|order| &order.id == id)
                .ok_or_else(|| {
                    ServiceError::Invalid(format!("sub-order `{}` is not pending", id))
                })?;
            selection.push(order.clone());
        }
        Ok(selection)
    }
}
