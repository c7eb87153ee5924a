use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Introduction,
    Inputs,
    Results,
    CostBenefit,
    Wtp,
    Scenarios,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Introduction,
        Tab::Inputs,
        Tab::Results,
        Tab::CostBenefit,
        Tab::Wtp,
        Tab::Scenarios,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Introduction => "Introduction",
            Tab::Inputs => "Inputs",
            Tab::Results => "Results",
            Tab::CostBenefit => "Cost-Benefit",
            Tab::Wtp => "WTP",
            Tab::Scenarios => "Scenarios",
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct ActiveTab(pub Tab);
