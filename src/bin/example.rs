//! Example: response of a 0.8 s oscillator to a synthetic pulse record

use seismic_solver::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Seismic Solver Example ===\n");

    // Synthetic ground motion: a decaying 1.2 Hz pulse over 20 s,
    // followed by 8 s of free vibration
    let dt = 0.01;
    let record_len = 2000;
    let mut record: Vec<f64> = (0..record_len)
        .map(|i| {
            let t = i as f64 * dt;
            0.35 * (-0.25 * t).exp() * (2.0 * std::f64::consts::PI * 1.2 * t).sin()
        })
        .collect();
    record.extend(std::iter::repeat(0.0).take(800));
    println!(
        "Record: {} samples at dt = {} s ({} s total)",
        record.len(),
        dt,
        (record.len() - 1) as f64 * dt
    );

    // Full Newmark integration
    let oscillator = Oscillator::new(0.8, 0.05)?;
    let solver = NewmarkSolver::new(oscillator);
    let history = solver.solve(&record, dt)?;
    let peaks = history.peaks();

    println!("\n--- Time integration (T = 0.8 s, 5% damping) ---");
    println!("Peak displacement:        {:.5}", peaks.displacement);
    println!("Peak velocity:            {:.5}", peaks.velocity);
    println!("Peak absolute accel.:     {:.5}", peaks.absolute_acceleration);

    // Residual drift from the free-vibration tail
    let residual = residual_drift(&history.displacement, record_len)?;
    println!("Estimated residual drift: {:.6}", residual);

    // Average-acceleration run for comparison
    let alternate = NewmarkSolver::new(oscillator)
        .with_params(NewmarkParams::average_acceleration())
        .solve(&record, dt)?;
    println!("\n--- Integration scheme agreement ---");
    println!(
        "NSE between schemes: {:.4}",
        nse(&alternate.displacement, &history.displacement)?
    );

    // Elastic response spectrum over the default 0.02-3.0 s grid
    let spectrum = response_spectrum(&record, dt, 0.05, &PeriodGrid::default())?;
    println!("\n--- Response spectrum ({} periods) ---", spectrum.len());
    println!("Sa(0.8 s): {:.5}", spectrum.sa_at(0.8));
    println!("Sa(1.5 s): {:.5}", spectrum.sa_at(1.5));
    println!(
        "Pseudo vs absolute acceleration KGE: {:.4}",
        kge(
            &spectrum.pseudo_acceleration,
            &spectrum.peak_absolute_acceleration
        )?
    );

    let targets = [0.5, 0.8, 1.5];
    let sa_avg = average_spectral_acceleration(&spectrum, &targets)?;
    for (t, avg) in targets.iter().zip(sa_avg.iter()) {
        println!("Sa_avg({t} s): {avg:.5}");
    }

    // Frequency content of the record
    let fourier = fourier_amplitude_spectrum(&record, dt)?;
    if let Some(period) = fourier.dominant_period() {
        println!("\nDominant record period: {:.3} s", period);
    }

    // NSR-10 design spectrum for comparison
    let design = Nsr10Spectrum::new(0.15, 0.2, 2.1, 3.2, 1.0)?;
    println!("\n--- NSR-10 design spectrum ---");
    println!("T0 = {:.3} s, Tc = {:.3} s, TL = {:.3} s", design.t0(), design.tc(), design.tl());
    println!("Design Sa(0.8 s): {:.4} g", design.sa_at(0.8));

    // Fiber-section calibration helpers
    let steel = ReinforcingSteel::grade_420();
    let envelope = steel.buckling_envelope(100.0, 16.0)?;
    println!("\n--- Grade 420 bar, hoops at 100 mm, 16 mm diameter ---");
    for (strain, stress) in envelope.compression_branch() {
        println!("  strain {:>9.5}  stress {:>8.2} MPa", strain, stress);
    }

    let concrete = Concrete::unconfined(28.0)?;
    let e20 = concrete.regularized_crushing_strain(3000.0, 5)?;
    println!("\n28 MPa concrete, 3 m element, 5 integration points:");
    println!("  regularized crushing strain = {:.5}", e20);

    println!("\nDone.");
    Ok(())
}
