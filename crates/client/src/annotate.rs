//! Catalog-backed annotations for a decoded build.

use build_catalog::{CatalogClient, CatalogIndex, Result};
use build_core::{BuildTemplate, SkillSlot, TraitTier};

/// Names and resolved trait ids for one build.
///
/// `trait_ids[slot][tier]` is the catalog trait id the build's 2-bit
/// choice resolves to, when the specialization is known and the tier
/// has a selection.
pub struct BuildAnnotations {
    pub index: CatalogIndex,
    pub trait_ids: [[Option<u32>; 3]; 3],
}

/// Fetches every name the build references.
///
/// One call per category: professions (always), the used
/// specializations, the traits those specializations resolve the
/// build's choices to, and the equipped skills.
pub async fn fetch(client: &CatalogClient, template: &BuildTemplate) -> Result<BuildAnnotations> {
    let mut index = CatalogIndex::new();
    let mut trait_ids = [[None; 3]; 3];

    index.add_professions(&client.professions().await?);

    let spec_ids: Vec<u32> = template
        .specializations
        .iter()
        .filter(|slot| !slot.is_empty())
        .map(|slot| u32::from(slot.id()))
        .collect();

    if !spec_ids.is_empty() {
        let specializations = client.specializations(&spec_ids).await?;
        index.add_specializations(&specializations);

        for (slot_index, slot) in template.specializations.iter().enumerate() {
            let Some(info) = specializations
                .iter()
                .find(|info| info.id == u32::from(slot.id()))
            else {
                continue;
            };
            for tier in TraitTier::all() {
                trait_ids[slot_index][tier.index()] =
                    info.major_trait_id(tier, slot.choice(tier));
            }
        }

        let wanted: Vec<u32> = trait_ids.iter().flatten().filter_map(|id| *id).collect();
        index.add_traits(&client.traits(&wanted).await?);
    }

    let mut skill_ids: Vec<u32> = SkillSlot::all()
        .into_iter()
        .flat_map(|slot| {
            [
                template.skills_land.get(slot),
                template.skills_water.get(slot),
            ]
        })
        .filter(|&id| id != 0)
        .collect();
    skill_ids.sort_unstable();
    skill_ids.dedup();
    index.add_skills(&client.skills(&skill_ids).await?);

    Ok(BuildAnnotations { index, trait_ids })
}
