mod eligibility_contract;
mod resolution_contract;
