/// Signup-ready member data for tests.
#[derive(Debug, Clone)]
pub struct SampleMember {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
}

impl SampleMember {
    /// The flags `moviehub auth signup` expects, ready for `TestWorld::run`.
    pub fn signup_args(&self) -> Vec<&str> {
        vec![
            "auth",
            "signup",
            "--email",
            self.email,
            "--password",
            self.password,
            "--name",
            self.name,
            "--phone",
            self.phone,
        ]
    }

    pub fn login_args(&self) -> Vec<&str> {
        vec![
            "auth",
            "login",
            "--email",
            self.email,
            "--password",
            self.password,
        ]
    }
}

pub fn sample_member() -> SampleMember {
    SampleMember {
        email: "mira@example.com",
        password: "pass1234",
        name: "Mira",
        phone: "010-1234-5678",
    }
}

pub fn second_member() -> SampleMember {
    SampleMember {
        email: "dokyun@example.com",
        password: "word5678",
        name: "Dokyun",
        phone: "010-8765-4321",
    }
}
