use bevy_egui::egui;

pub(crate) fn show(ui: &mut egui::Ui) {
    ui.heading("STEPS: Scalable Training Estimation Planning System");
    ui.add_space(6.0);
    ui.label(
        "This calculator estimates how many health workers would take up a \
         training program, what it would cost and return, and how much \
         respondents value each program feature.",
    );
    ui.add_space(8.0);

    ui.strong("How to use it");
    ui.label("1. On the Inputs tab, pick a level for every program attribute and set the cohort size and cost per participant.");
    ui.label("2. Press Calculate to see the predicted uptake on the Results tab.");
    ui.label("3. Review costs, benefits and QALY gains on the Cost-Benefit tab.");
    ui.label("4. The WTP tab shows the dollar value of each feature relative to its reference level.");
    ui.label("5. Save scenarios to compare them side by side and export the list as a PDF.");
    ui.add_space(8.0);

    ui.strong("About the model");
    ui.label(
        "Uptake comes from a discrete choice (logit) model: each feature adds \
         to the program's utility, and the share choosing the program rises \
         with utility relative to opting out. Cost and benefit figures are \
         illustrative placeholders per training level.",
    );
}
