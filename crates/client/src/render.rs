//! Terminal rendering for decoded builds.

use build_catalog::{Category, NameOracle};
use build_core::{BuildTemplate, EquipmentTemplate, SkillBar, SkillSlot, TraitTier};
use console::style;

use crate::annotate::BuildAnnotations;

/// Prints a build template, annotating ids with names when available.
pub fn print_build(template: &BuildTemplate, annotations: Option<&BuildAnnotations>) {
    let profession_label = annotations
        .and_then(|a| {
            a.index
                .lookup(Category::Profession, u32::from(template.profession_id))
        })
        .map(ToOwned::to_owned)
        .or_else(|| template.profession().map(|p| p.to_string()));

    match profession_label {
        Some(name) => println!(
            "{} {} ({})",
            style("profession:").bold(),
            name,
            template.profession_id
        ),
        None => println!(
            "{} {} {}",
            style("profession:").bold(),
            template.profession_id,
            style("(unknown code)").red()
        ),
    }

    println!("{}", style("specializations:").bold());
    for (position, slot) in template.specializations.iter().enumerate() {
        if slot.is_empty() {
            println!("  {}. {}", position + 1, style("(empty)").dim());
            continue;
        }

        let name = annotations
            .and_then(|a| {
                a.index
                    .lookup(Category::Specialization, u32::from(slot.id()))
            })
            .unwrap_or("?");
        print!("  {}. {} ({})", position + 1, name, slot.id());

        let tiers: Vec<String> = TraitTier::all()
            .into_iter()
            .map(|tier| {
                let choice = slot.choice(tier);
                if choice.is_none() {
                    return "-".to_owned();
                }
                match annotations
                    .and_then(|a| a.trait_ids[position][tier.index()])
                    .and_then(|id| {
                        annotations.and_then(|a| {
                            a.index
                                .lookup(Category::Trait, id)
                                .map(|name| format!("{name} ({id})"))
                        })
                    }) {
                    Some(label) => label,
                    None => choice.bits().to_string(),
                }
            })
            .collect();
        println!(" traits: {}", tiers.join(" / "));
    }

    print_skill_bar("skills (terrestrial):", &template.skills_land, annotations);
    print_skill_bar("skills (aquatic):", &template.skills_water, annotations);

    if !template.equipment.is_empty() {
        println!(
            "{} {} opaque byte(s)",
            style("equipment region:").bold(),
            template.equipment.len()
        );
    }
}

fn print_skill_bar(header: &str, bar: &SkillBar, annotations: Option<&BuildAnnotations>) {
    println!("{}", style(header).bold());
    if bar.is_empty() {
        println!("  {}", style("(all slots empty)").dim());
        return;
    }
    for slot in SkillSlot::all() {
        let id = bar.get(slot);
        if id == 0 {
            println!("  {slot}: {}", style("-").dim());
            continue;
        }
        match annotations.and_then(|a| a.index.lookup(Category::Skill, id)) {
            Some(name) => println!("  {slot}: {name} ({id})"),
            None => println!("  {slot}: {id}"),
        }
    }
}

/// Prints an equipment-template link as its opaque records.
pub fn print_equipment(template: &EquipmentTemplate) {
    println!(
        "{} {} record(s)",
        style("equipment template:").bold(),
        template.records.len()
    );
    for record in &template.records {
        println!(
            "  slot 0x{:02X}: {} byte(s)",
            record.slot,
            record.data.len()
        );
    }
    if !template.trailing.is_empty() {
        println!(
            "  {} {} trailing byte(s)",
            style("plus").dim(),
            template.trailing.len()
        );
    }
}
