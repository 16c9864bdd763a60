use crate::api::admin::AdminInput;
use crate::api::chatbot::{ChatbotRequest, ChatbotResponse};
use crate::api::department::DepartmentInput;
use crate::api::employee::EmployeeInput;
use crate::api::event::EventInput;
use crate::api::leave::{LeaveInput, LeaveStatusUpdate};
use crate::api::salary::SalaryInput;
use crate::model::admin::Admin;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::event::Event;
use crate::model::leave::Leave;
use crate::model::salary::Salary;
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Management System API",
        version = "1.0.0",
        description = r#"
## Employee Management System (EMS)

REST backend for managing an organization's people data.

### 🔹 Key Features
- **Employee Management**
  - Create, update, list, and remove employee profiles
- **Department & Event Management**
  - Plain CRUD over organizational records
- **Leave Management**
  - Submit requests (they always start *Pending*) and update their status
- **Salary Management**
  - Track salary records, defaulting to *UNPAID*
- **Chatbot**
  - Stateless echo endpoint used by the frontend assistant

### 🔐 Security
Endpoints under `/api` are protected with **JWT Bearer authentication**;
`/api/admin/**` and `/api/employee/**` additionally require the matching role.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::admin::list_admins,
        crate::api::admin::create_admin,
        crate::api::admin::update_admin,
        crate::api::admin::delete_admin,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::department::list_departments,
        crate::api::department::create_department,
        crate::api::department::update_department,
        crate::api::department::delete_department,

        crate::api::event::list_events,
        crate::api::event::create_event,
        crate::api::event::update_event,
        crate::api::event::delete_event,

        crate::api::leave::leave_list,
        crate::api::leave::create_leave,
        crate::api::leave::update_leave_status,
        crate::api::leave::delete_leave,

        crate::api::salary::list_salaries,
        crate::api::salary::create_salary,
        crate::api::salary::update_salary,
        crate::api::salary::delete_salary,

        crate::api::chatbot::send_message
    ),
    components(
        schemas(
            Admin,
            AdminInput,
            Employee,
            EmployeeInput,
            Department,
            DepartmentInput,
            Event,
            EventInput,
            Leave,
            LeaveInput,
            LeaveStatusUpdate,
            Salary,
            SalaryInput,
            ChatbotRequest,
            ChatbotResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admin", description = "Admin record APIs"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Department", description = "Department management APIs"),
        (name = "Event", description = "Company event APIs"),
        (name = "Leave", description = "Leave request APIs"),
        (name = "Salary", description = "Salary record APIs"),
        (name = "Chatbot", description = "Chatbot echo API"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
