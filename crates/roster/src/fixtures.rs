//! Built-in demo roster.
//!
//! Ten fixed candidates used when no roster file is configured. The data is
//! literal so that anything built on it (tests, demos) is deterministic.

use crate::types::{Assessment, Candidate, Project, Status};

struct Seed {
    id: &'static str,
    name: &'static str,
    domain: &'static str,
    score: u8,
    status: Status,
    experience: &'static str,
    location_preference: &'static str,
    education: &'static str,
    skills: [&'static str; 5],
    availability: &'static str,
    location: &'static str,
    badge: &'static str,
}

const SEEDS: [Seed; 10] = [
    Seed {
        id: "1",
        name: "Arjun Sharma",
        domain: "Full Stack Developer",
        score: 95,
        status: Status::Available,
        experience: "1-3 years",
        location_preference: "Remote",
        education: "B.Tech",
        skills: ["React", "Node.js", "MongoDB", "Express.js", "TypeScript"],
        availability: "Immediate",
        location: "Mumbai, India",
        badge: "Top Performer",
    },
    Seed {
        id: "2",
        name: "Priya Patel",
        domain: "UI/UX Designer",
        score: 92,
        status: Status::Available,
        experience: "0-1 years",
        location_preference: "Hybrid",
        education: "BCA",
        skills: ["Figma", "Adobe XD", "Sketch", "Prototyping", "User Research"],
        availability: "15 days",
        location: "Bangalore, India",
        badge: "Creative Excellence",
    },
    Seed {
        id: "3",
        name: "Rahul Singh",
        domain: "Python Developer",
        score: 89,
        status: Status::Interviewed,
        experience: "1-3 years",
        location_preference: "Onsite",
        education: "M.Tech",
        skills: ["Python", "Django", "PostgreSQL", "Redis", "Docker"],
        availability: "30 days",
        location: "Delhi, India",
        badge: "Interview Success",
    },
    Seed {
        id: "4",
        name: "Sneha Gupta",
        domain: "Frontend Developer",
        score: 87,
        status: Status::Available,
        experience: "Fresher",
        location_preference: "Remote",
        education: "B.Tech",
        skills: ["React", "JavaScript", "CSS", "HTML", "Redux"],
        availability: "Immediate",
        location: "Pune, India",
        badge: "Fresh Talent",
    },
    Seed {
        id: "5",
        name: "Vikram Reddy",
        domain: "DevOps Engineer",
        score: 85,
        status: Status::Available,
        experience: "3+ years",
        location_preference: "Hybrid",
        education: "B.Tech",
        skills: ["Docker", "Kubernetes", "AWS", "Jenkins", "Terraform"],
        availability: "15 days",
        location: "Hyderabad, India",
        badge: "DevOps Expert",
    },
    Seed {
        id: "6",
        name: "Ananya Krishnan",
        domain: "Data Scientist",
        score: 84,
        status: Status::Available,
        experience: "1-3 years",
        location_preference: "Remote",
        education: "M.Tech",
        skills: ["Python", "Machine Learning", "TensorFlow", "Pandas", "SQL"],
        availability: "Immediate",
        location: "Chennai, India",
        badge: "Data Science Pro",
    },
    Seed {
        id: "7",
        name: "Karthik Nair",
        domain: "Backend Developer",
        score: 82,
        status: Status::InProcess,
        experience: "1-3 years",
        location_preference: "Onsite",
        education: "B.Tech",
        skills: ["Java", "Spring Boot", "MySQL", "Redis", "Microservices"],
        availability: "30 days",
        location: "Kochi, India",
        badge: "Backend Specialist",
    },
    Seed {
        id: "8",
        name: "Meera Joshi",
        domain: "QA Tester",
        score: 81,
        status: Status::Available,
        experience: "0-1 years",
        location_preference: "Hybrid",
        education: "BCA",
        skills: ["Selenium", "TestNG", "Java", "API Testing", "Manual Testing"],
        availability: "15 days",
        location: "Indore, India",
        badge: "Quality Assurance",
    },
    Seed {
        id: "9",
        name: "Amit Kumar",
        domain: "Full Stack Developer",
        score: 80,
        status: Status::Available,
        experience: "1-3 years",
        location_preference: "Remote",
        education: "B.Tech",
        skills: ["Vue.js", "Node.js", "MongoDB", "Express.js", "JavaScript"],
        availability: "Immediate",
        location: "Jaipur, India",
        badge: "Full Stack",
    },
    Seed {
        id: "10",
        name: "Roshni Shah",
        domain: "UI/UX Designer",
        score: 79,
        status: Status::Available,
        experience: "Fresher",
        location_preference: "Onsite",
        education: "Diploma",
        skills: ["Figma", "Adobe Illustrator", "Prototyping", "Wireframing", "User Research"],
        availability: "30 days",
        location: "Ahmedabad, India",
        badge: "Rising Designer",
    },
];

/// The demo roster, in rank order
pub fn demo_roster() -> Vec<Candidate> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(index, seed)| from_seed(index, seed))
        .collect()
}

fn from_seed(index: usize, seed: &Seed) -> Candidate {
    let handle = seed.name.to_lowercase().replace(' ', ".");
    let rank = index as u32 + 1;

    let mut candidate = Candidate::new(seed.id, seed.name, format!("{}@email.com", handle))
        .with_domain(seed.domain)
        .with_experience(seed.experience)
        .with_location_preference(seed.location_preference)
        .with_education(seed.education)
        .with_availability(seed.availability)
        .with_skills(seed.skills)
        .with_score(seed.score)
        .with_status(seed.status);

    candidate.rank = Some(rank);
    candidate.location = Some(seed.location.to_string());
    candidate.phone = Some(format!("+91 98765432{:02}", index + 10));
    candidate.resume_link = Some(format!("https://example.com/resume{}.pdf", seed.id));
    candidate.badges = vec![seed.badge.to_string()];
    candidate.projects = vec![Project {
        title: format!("{} Portfolio Project", seed.domain),
        description: format!("Capstone project built with {}", seed.skills[..3].join(", ")),
        technologies: seed.skills[..3].iter().map(|s| s.to_string()).collect(),
        link: None,
    }];
    candidate.assessments = vec![Assessment {
        kind: "Technical Test".to_string(),
        score: u32::from(seed.score.saturating_sub(2)),
        max_score: 100,
        date: format!("2024-01-{:02}", 15 - index),
        feedback: None,
    }];
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CandidateStore;

    #[test]
    fn test_demo_roster_is_valid_store() {
        let store = CandidateStore::new(demo_roster()).unwrap();
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_demo_roster_is_deterministic() {
        assert_eq!(demo_roster(), demo_roster());
    }

    #[test]
    fn test_demo_roster_contents() {
        let roster = demo_roster();
        assert_eq!(roster[0].email, "arjun.sharma@email.com");
        assert_eq!(roster[0].rank, Some(1));
        assert_eq!(roster[0].phone.as_deref(), Some("+91 9876543210"));
        assert_eq!(roster[9].id, "10");
        assert_eq!(roster[9].phone.as_deref(), Some("+91 9876543219"));
        assert_eq!(roster[6].status, Some(Status::InProcess));
        assert!(roster.iter().all(|c| c.skills.len() == 5));
    }
}
