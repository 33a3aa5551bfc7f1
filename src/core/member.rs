use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Parent,
    Child,
    Grandparent,
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Child => "Child",
            Self::Grandparent => "Grandparent",
            Self::Other => "Other",
        }
    }

    pub const ALL: &'static [Role] = &[Role::Parent, Role::Child, Role::Grandparent, Role::Other];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub age: Option<u32>,
    pub birthday: Option<NaiveDate>,
    pub clothes_size: String,
    pub shoe_size: String,
    pub favorite_color: String,
    pub allergies: String,
    pub bio: String,
    /// Display counter only; not derived from the chore collection.
    pub tasks_completed: u32,
    pub avatar: String,
}

impl FamilyMember {
    pub fn new(id: String, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            age: None,
            birthday: None,
            clothes_size: String::new(),
            shoe_size: String::new(),
            favorite_color: String::new(),
            allergies: String::new(),
            bio: String::new(),
            tasks_completed: 0,
            avatar: "avatar-default-symbolic".to_string(),
        }
    }
}

/// Append a new member with a freshly minted id. Rejects a blank name by
/// leaving the collection untouched.
pub fn add_member(
    members: &mut Vec<FamilyMember>,
    name: &str,
    role: Role,
    favorite_color: &str,
) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }

    let id = (members.len() + 1).to_string();
    let mut member = FamilyMember::new(id, name, role);
    member.favorite_color = favorite_color.trim().to_string();
    members.push(member);
    true
}

pub fn find_member<'a>(members: &'a [FamilyMember], id: &str) -> Option<&'a FamilyMember> {
    members.iter().find(|m| m.id == id)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

pub fn sample_members() -> Vec<FamilyMember> {
    vec![
        FamilyMember {
            id: "1".into(),
            name: "John Smith".into(),
            role: Role::Parent,
            age: Some(42),
            birthday: Some(date(1981, 5, 15)),
            clothes_size: "L".into(),
            shoe_size: "10".into(),
            favorite_color: "Blue".into(),
            allergies: "None".into(),
            bio: "Dad who loves DIY projects and coaching soccer on weekends.".into(),
            tasks_completed: 15,
            avatar: "avatar-default-symbolic".into(),
        },
        FamilyMember {
            id: "2".into(),
            name: "Sarah Smith".into(),
            role: Role::Parent,
            age: Some(40),
            birthday: Some(date(1983, 8, 22)),
            clothes_size: "M".into(),
            shoe_size: "8".into(),
            favorite_color: "Purple".into(),
            allergies: "Peanuts".into(),
            bio: "Mom who works as a graphic designer and enjoys gardening.".into(),
            tasks_completed: 18,
            avatar: "avatar-default-symbolic".into(),
        },
        FamilyMember {
            id: "3".into(),
            name: "Emma Smith".into(),
            role: Role::Child,
            age: Some(12),
            birthday: Some(date(2011, 3, 10)),
            clothes_size: "Youth L".into(),
            shoe_size: "5".into(),
            favorite_color: "Pink".into(),
            allergies: "None".into(),
            bio: "Loves art, reading, and playing with friends.".into(),
            tasks_completed: 8,
            avatar: "avatar-default-symbolic".into(),
        },
        FamilyMember {
            id: "4".into(),
            name: "Michael Smith".into(),
            role: Role::Child,
            age: Some(9),
            birthday: Some(date(2014, 11, 5)),
            clothes_size: "Youth M".into(),
            shoe_size: "3".into(),
            favorite_color: "Green".into(),
            allergies: "Dairy".into(),
            bio: "Enjoys soccer, video games, and building with Legos.".into(),
            tasks_completed: 6,
            avatar: "avatar-default-symbolic".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_member_mints_next_id() {
        let mut members = sample_members();
        assert!(add_member(&mut members, "Grandma Ruth", Role::Grandparent, "#33FF57"));
        assert_eq!(members.len(), 5);
        let added = members.last().unwrap();
        assert_eq!(added.id, "5");
        assert_eq!(added.tasks_completed, 0);
        assert_eq!(added.role, Role::Grandparent);
    }

    #[test]
    fn add_member_rejects_blank_name() {
        let mut members = sample_members();
        assert!(!add_member(&mut members, "   ", Role::Child, "#FF5733"));
        assert_eq!(members.len(), 4);
    }

    #[test]
    fn find_member_by_id() {
        let members = sample_members();
        assert_eq!(find_member(&members, "2").unwrap().name, "Sarah Smith");
        assert!(find_member(&members, "99").is_none());
    }
}
