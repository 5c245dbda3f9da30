//! Business logic helpers for validated partner mutations and the share limit.

use uuid::Uuid;

use crate::domain::common::{finite_amount, required_text};
use crate::domain::{NewPartner, Partner, PartnerChanges};
use crate::errors::{BookError, Result};
use crate::store::{Roster, SHARE_LIMIT};

/// Provides validated mutations for [`Partner`] entries of a [`Roster`].
///
/// The sum of all partner shares never exceeds [`crate::store::SHARE_LIMIT`]
/// after a successful call.
pub struct PartnerService;

impl PartnerService {
    /// Adds a partner when the new share still fits under the limit.
    pub fn add(roster: &mut Roster, draft: NewPartner) -> Result<Uuid> {
        let name = required_text("partner name", &draft.name)?;
        let share = Self::validate_share(draft.share)?;
        let personal_expenses = finite_amount("personal expenses", draft.personal_expenses)?;
        let personal_gains = finite_amount("personal gains", draft.personal_gains)?;

        let allocated = roster.total_share();
        Self::ensure_share_fits(allocated, share, allocated + share)?;

        let partner = Partner::new(name, share).with_adjustments(personal_expenses, personal_gains);
        Ok(roster.add_partner(partner))
    }

    /// Replaces a partner's fields in place, keeping its id. The share check
    /// ignores the partner's own current share.
    pub fn edit(roster: &mut Roster, id: Uuid, changes: PartnerChanges) -> Result<()> {
        let name = required_text("partner name", &changes.name)?;
        let share = Self::validate_share(changes.share)?;
        let personal_expenses = finite_amount("personal expenses", changes.personal_expenses)?;
        let personal_gains = changes
            .personal_gains
            .map(|gains| finite_amount("personal gains", gains))
            .transpose()?;

        if roster.partner(id).is_none() {
            return Err(BookError::not_found("partner", id));
        }
        Self::ensure_share_fits(
            roster.total_share_excluding(id),
            share,
            roster.total_share_with(id, share),
        )?;

        let partner = roster
            .partner_mut(id)
            .ok_or_else(|| BookError::not_found("partner", id))?;
        partner.name = name;
        partner.share = share;
        partner.personal_expenses = personal_expenses;
        if let Some(gains) = personal_gains {
            partner.personal_gains = gains;
        }
        Ok(())
    }

    pub fn remove(roster: &mut Roster, id: Uuid) -> Result<Partner> {
        roster
            .take_partner(id)
            .ok_or_else(|| BookError::not_found("partner", id))
    }

    pub fn list(roster: &Roster) -> Vec<&Partner> {
        roster.partners.iter().collect()
    }

    fn validate_share(share: f64) -> Result<f64> {
        let share = finite_amount("share", share)?;
        if share > 0.0 {
            Ok(share)
        } else {
            Err(BookError::validation("share must be greater than zero"))
        }
    }

    /// `total` is the exact sum the roster will hold after the change; it must
    /// not exceed [`SHARE_LIMIT`].
    fn ensure_share_fits(allocated: f64, requested: f64, total: f64) -> Result<()> {
        if total <= SHARE_LIMIT {
            Ok(())
        } else {
            Err(BookError::ShareLimitExceeded {
                allocated,
                requested,
            })
        }
    }
}
