//! The GrowthX application questionnaire.

use leadform::{CatalogError, Choice, Step, StepCatalog, choices_from_labels};

pub const INDUSTRIES: &[&str] = &[
    "Agritech",
    "B2B SaaS",
    "Consumer Internet",
    "D2C",
    "Edtech",
    "Fintech",
    "Gaming",
    "Healthcare",
    "Logistics",
    "Media",
    "Real Estate",
    "Travel",
    "Other",
];

pub const ROLES: &[&str] = &[
    "Founder",
    "Product Manager",
    "Engineer",
    "Designer",
    "Marketer",
    "Other",
];

/// Goals offered on the goals step. Founder-only goals are hidden for other roles.
pub fn goal_choices() -> Vec<Choice> {
    vec![
        Choice::from_label("Get promoted"),
        Choice::from_label("Switch to a new function"),
        Choice::from_label("Build a strong network"),
        Choice::from_label("Find product-market fit").visible_when("role", "founder"),
        Choice::from_label("Raise funding").visible_when("role", "founder"),
        Choice::from_label("Hire a great team").visible_when("role", "founder"),
        Choice::from_label("Start my own company"),
    ]
}

/// Build the application questionnaire.
pub fn application() -> Result<StepCatalog, CatalogError> {
    let steps = vec![
        Step::information("Up-skilling requires time commitment")
            .with_content(
                "The GrowthX experience is designed by keeping in mind the working hours \
                 founders & full time operators typically work in.\n\
                 \n\
                 You will spend\n\
                 - 6 hours/week for the first 5 weeks\n\
                 - 15 hours/week for the last 3 weeks",
            )
            .with_confirm_label("I agree"),
        Step::text("fname", "What's your first name?"),
        Step::text("lname", "What's your last name, [fname]?"),
        Step::combobox(
            "industry",
            "What industry is your company in?",
            choices_from_labels(INDUSTRIES),
        )
        .with_content("We will personalize your learning experience accordingly"),
        Step::single_select(
            "role",
            "Your role in your company?",
            choices_from_labels(ROLES),
        )
        .with_content("We want to understand how you spend your time right now."),
        Step::multi_select(
            "goals",
            "[fname], what's your professional goal for the next 12 months?",
            goal_choices(),
            2,
        )
        .with_content("Any 2"),
        Step::email("email", "Email you'd like to register with?").with_content(
            "We will keep all our communications with you through this email. \
             Do check your spam inbox if you can't find our application received email.",
        ),
        Step::phone("phone", "Your phone number").with_content(
            "We won't call you unless it is absolutely required to process your application.",
        ),
    ];

    StepCatalog::new(steps)
}
