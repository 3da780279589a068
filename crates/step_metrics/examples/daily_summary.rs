use step_metrics::{UserProfile, day_steps_report, observability, training_report};

fn main() {
    observability::init_tracing();

    let profile = UserProfile::from_env().unwrap_or_else(|e| {
        tracing::info!(error = %e, "using default profile");
        UserProfile::new(70.0, 175.0)
    });

    for raw in ["1000,3h00m", "0,10m", "abc,10m"] {
        print!("{}", day_steps_report(raw, profile.weight_kg, profile.height_cm));
    }
    for raw in ["3000,Running,30m", "6000,Walking,1h15m", "1000,Swimming,10m"] {
        println!("{}", training_report(raw, profile.weight_kg, profile.height_cm));
    }
}
