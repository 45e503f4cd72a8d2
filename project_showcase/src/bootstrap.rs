//! First-run cache seeding

use crate::error::Result;
use crate::repository::ProjectRepository;
use showcase_common::ProjectRecord;

/// The three projects a fresh cache starts with
pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            "Ray Tracer Project",
            "ray_tracer.png",
            "3D rendered scene showing light reflection and shadow effects",
            "Developed a comprehensive raytracer from scratch in C++, implementing core rendering \
             features including shadow computation, reflection handling, and geometric primitive \
             intersection calculations.",
            "https://github.com/liuziyue141/RayTracerProject",
        ),
        ProjectRecord::new(
            "Codename",
            "codename.avif",
            "Screenshot of Codename game interface showing word grid",
            "A strategic word-guessing party game built with React frontend and Node.js backend. \
             Implemented Socket.IO for real-time gameplay features.",
            "https://github.com/liuziyue141/codename",
        ),
        ProjectRecord::new(
            "Intent Classification Using BERT",
            "pa4.ppm",
            "Contrastive learning diagram",
            "Led an NLP project analyzing Amazon's intent dataset using BERT and advanced \
             contrastive learning approaches, achieving 88% accuracy on intent classification.",
            "/CSE_151B___PA4___Report.pdf",
        ),
    ]
}

/// Store the sample projects if the cache has never been set.
///
/// Existing contents, valid or not, are left alone. Returns whether the
/// cache was seeded.
pub fn seed_sample_projects(repository: &ProjectRepository) -> Result<bool> {
    if !repository.is_unset()? {
        log::debug!("Project cache already populated, skipping seed");
        return Ok(false);
    }

    let samples = sample_projects();
    repository.save(&samples)?;
    log::info!("Seeded project cache with {} sample projects", samples.len());
    Ok(true)
}
