use super::domain::{ActionPriority, NextAction, ReadinessSnapshot, ReadinessTier};

struct Candidate {
    title: &'static str,
    description: &'static str,
    link: &'static str,
    priority: ActionPriority,
    applies: fn(&ReadinessSnapshot) -> bool,
}

/// Candidate actions in surfacing order: all high before medium before
/// low, ties broken by this listing. One action per unmet milestone.
const CANDIDATES: [Candidate; 5] = [
    Candidate {
        title: "Complete your profile",
        description: "Add your education, skills, and career direction",
        link: "/profile",
        priority: ActionPriority::High,
        applies: |snapshot| !snapshot.has_profile,
    },
    Candidate {
        title: "Upload certificates/documents",
        description: "Certificates and transcripts feed your readiness score",
        link: "/documents",
        priority: ActionPriority::High,
        applies: |snapshot| snapshot.has_profile && snapshot.document_count == 0,
    },
    Candidate {
        title: "Generate your career score",
        description: "See your career readiness analysis",
        link: "/career-analysis",
        priority: ActionPriority::Medium,
        applies: |snapshot| snapshot.document_count >= 1 && snapshot.composite_score.is_none(),
    },
    Candidate {
        title: "Explore career pathways",
        description: "View personalized job recommendations",
        link: "/career-pathways",
        priority: ActionPriority::Medium,
        applies: |snapshot| {
            snapshot
                .composite_score
                .is_some_and(|score| score < ReadinessTier::JOB_READY_MIN)
        },
    },
    Candidate {
        title: "Generate a detailed report",
        description: "Download a full readiness report to share",
        link: "/reports",
        priority: ActionPriority::Low,
        applies: |snapshot| snapshot.composite_score.is_some() && snapshot.report_count == 0,
    },
];

/// Plan the prioritized next actions for one snapshot. The result is
/// finite (at most one action per candidate), duplicate-free by link, and
/// empty when the student is all caught up.
pub fn plan(snapshot: &ReadinessSnapshot) -> Vec<NextAction> {
    CANDIDATES
        .iter()
        .filter(|candidate| (candidate.applies)(snapshot))
        .map(|candidate| NextAction {
            title: candidate.title,
            description: candidate.description,
            link: candidate.link,
            priority: candidate.priority,
        })
        .collect()
}
