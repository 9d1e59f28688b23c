//! Compose a build from flags and print its chat link.

use anyhow::{Context, Result, anyhow, bail};
use build_core::{
    BuildTemplate, ChatLink, Profession, SkillSlot, SpecializationSlot, TraitChoice,
};
use clap::Parser;
use console::style;
use std::str::FromStr;

/// Compose a build from flags and print its chat link
///
/// Specialization slots are given as `ID:A,M,G` where A/M/G are the
/// adept/master/grandmaster trait choices (0 = none, 1..=3 = position).
#[derive(Parser, Debug)]
pub struct Encode {
    /// Profession name or numeric code (e.g. 'guardian' or 1)
    #[arg(long)]
    pub profession: String,

    /// Specialization slot as 'ID:A,M,G' (repeat up to 3 times)
    #[arg(long = "spec", value_name = "ID:A,M,G")]
    pub specs: Vec<String>,

    /// Terrestrial heal skill id
    #[arg(long, default_value_t = 0)]
    pub heal: u32,

    /// Terrestrial utility skill ids in slot order (repeat up to 3 times)
    #[arg(long = "utility", value_name = "ID")]
    pub utilities: Vec<u32>,

    /// Terrestrial elite skill id
    #[arg(long, default_value_t = 0)]
    pub elite: u32,

    /// Aquatic heal skill id
    #[arg(long, default_value_t = 0)]
    pub water_heal: u32,

    /// Aquatic utility skill ids in slot order (repeat up to 3 times)
    #[arg(long = "water-utility", value_name = "ID")]
    pub water_utilities: Vec<u32>,

    /// Aquatic elite skill id
    #[arg(long, default_value_t = 0)]
    pub water_elite: u32,
}

impl Encode {
    pub fn execute(self) -> Result<()> {
        if self.specs.len() > 3 {
            bail!("a build holds exactly 3 specialization slots");
        }
        if self.utilities.len() > 3 || self.water_utilities.len() > 3 {
            bail!("a skill bar holds exactly 3 utility slots");
        }

        let mut template = BuildTemplate::new(parse_profession(&self.profession)?);

        for (index, spec) in self.specs.iter().enumerate() {
            template.set_specialization(index, parse_spec(spec)?);
        }

        template.skills_land.set(SkillSlot::Heal, self.heal);
        template.skills_land.set(SkillSlot::Elite, self.elite);
        for (slot, id) in [SkillSlot::Utility1, SkillSlot::Utility2, SkillSlot::Utility3]
            .into_iter()
            .zip(&self.utilities)
        {
            template.skills_land.set(slot, *id);
        }

        template.skills_water.set(SkillSlot::Heal, self.water_heal);
        template.skills_water.set(SkillSlot::Elite, self.water_elite);
        for (slot, id) in [SkillSlot::Utility1, SkillSlot::Utility2, SkillSlot::Utility3]
            .into_iter()
            .zip(&self.water_utilities)
        {
            template.skills_water.set(slot, *id);
        }

        let chat_string = ChatLink::Build(template)
            .chat_string()
            .context("Failed to encode build link")?;

        println!("{} {}", style("✓").green().bold(), chat_string);
        Ok(())
    }
}

/// Accepts either a numeric profession code or a profession name.
fn parse_profession(input: &str) -> Result<Profession> {
    if let Ok(code) = input.parse::<u8>() {
        return Profession::from_id(code)
            .ok_or_else(|| anyhow!("unknown profession code {code} (expected 1..=9)"));
    }
    Profession::from_str(input).map_err(|_| anyhow!("unknown profession {input:?}"))
}

/// Parses 'ID:A,M,G' into a validated specialization slot.
fn parse_spec(input: &str) -> Result<SpecializationSlot> {
    let (id, choices) = input
        .split_once(':')
        .ok_or_else(|| anyhow!("specialization must be 'ID:A,M,G', got {input:?}"))?;

    let id: u8 = id
        .trim()
        .parse()
        .with_context(|| format!("invalid specialization id in {input:?}"))?;

    let mut parsed = [TraitChoice::None; 3];
    let mut fields = choices.split(',');
    for slot in &mut parsed {
        let field = fields
            .next()
            .ok_or_else(|| anyhow!("expected 3 trait choices in {input:?}"))?;
        let value: u8 = field
            .trim()
            .parse()
            .with_context(|| format!("invalid trait choice in {input:?}"))?;
        if value > 3 {
            bail!("trait choice must be 0..=3, got {value}");
        }
        *slot = TraitChoice::from_bits(value);
    }
    if fields.next().is_some() {
        bail!("expected exactly 3 trait choices in {input:?}");
    }

    Ok(SpecializationSlot::new(id, parsed)?)
}
