use thiserror::Error;

/// The school selector's sentinel for a free-text entry. Must stay last in
/// [`SCHOOLS`].
pub const OTHER_SCHOOL: &str = "Other";

/// Fixed catalog shown by the submission form. Presentation configuration,
/// kept as data rather than logic.
pub const SCHOOLS: &[&str] = &[
    "African Leadership University Rwanda",
    "Arizona State University Campus Immersion",
    "California Institute of Technology",
    "Carnegie Mellon University",
    "Champlain College",
    "Columbia University in the City of New York",
    "Cornell University",
    "Dartmouth College",
    "Duke University",
    "ETH Zurich",
    "Georgetown University",
    "Georgia Institute of Technology-Main Campus",
    "Harvard University",
    "Illinois Institute of Technology",
    "Imperial College London",
    "Indian Institute of Technology Madras",
    "Indiana University-Bloomington",
    "Johns Hopkins University",
    "Kwame Nkrumah University of Science & Technology",
    "London Business School",
    "Makerere University",
    "Massachusetts Institute of Technology",
    "McGill University",
    "Michigan State University",
    "Mila - Quebec Artificial Intelligence Institute",
    "Minnesota State University-Mankato",
    "New Jersey Institute of Technology",
    "New York University",
    "Northeastern University",
    "Northumbria University",
    "Northwestern University",
    "Ohio State University-Main Campus",
    "Pennsylvania State University-Main Campus",
    "Princeton University",
    "Purdue University-Main Campus",
    "Rice University",
    "Stanford University",
    "Syracuse University",
    "Technical University of Munich",
    "The London School of Economics and Political Science",
    "The University of Edinburgh",
    "The University of Texas at Austin",
    "Trinity College Dublin",
    "Université Cheikh Anta Diop de Dakar",
    "University College Cork",
    "University College London",
    "University of California-Berkeley",
    "University of California-Irvine",
    "University of California-Los Angeles",
    "University of California-San Diego",
    "University of Cambridge",
    "University of Cape Town",
    "University of Chicago",
    "University of Exeter",
    "University of Florida",
    "University of Georgia",
    "University of Ghana",
    "University of Illinois Urbana-Champaign",
    "University of Lagos",
    "University of Louisville",
    "University of Maryland-College Park",
    "University of Massachusetts-Amherst",
    "University of Michigan-Ann Arbor",
    "University of Missouri-Columbia",
    "University of Nairobi",
    "University of Nevada-Las Vegas",
    "University of North Carolina at Chapel Hill",
    "University of Oxford",
    "University of Pennsylvania",
    "University of Pittsburgh-Pittsburgh Campus",
    "University of Rwanda",
    "University of San Francisco",
    "University of Southern California",
    "University of Toronto St. George",
    "University of Victoria",
    "University of Virginia-Main Campus",
    "University of Washington-Seattle Campus",
    "University of Waterloo",
    "University of Wisconsin-Madison",
    "Vanderbilt University",
    "Yale University",
    OTHER_SCHOOL,
];

pub fn is_catalog_school(name: &str) -> bool {
    SCHOOLS.contains(&name)
}

/// A resolved school value: a catalog entry, or the free text entered when
/// "Other" was chosen. The two cases are indistinguishable once stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchoolName(String);

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SchoolNameError {
    #[error("Please select your school")]
    Empty,
    #[error("School name must be 100 characters or less")]
    TooLong,
}

impl TryFrom<&str> for SchoolName {
    type Error = SchoolNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err(SchoolNameError::Empty)
        } else if value.chars().count() > 100 {
            Err(SchoolNameError::TooLong)
        } else {
            Ok(Self(value.trim().to_string()))
        }
    }
}

impl From<SchoolName> for String {
    fn from(value: SchoolName) -> Self {
        value.0
    }
}
